//! Discriminated decode of the two outline schemas models return
//!
//! Flat: `{"title": ..., "chapters": [{"title", "summary", "subtopics"}]}`
//! Nested: `{"title": ..., "parts": [{"part_title", "chapters": [{"chapter_number", "chapter_title", "sections"}]}]}`

use serde_json::{Map, Value};

/// Which schema a parsed object follows
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineShape {
    /// Part -> chapter -> section hierarchy
    Parts {
        title: Option<String>,
        parts: Vec<RawPart>,
    },
    /// Flat chapter list
    Chapters {
        title: Option<String>,
        chapters: Vec<RawChapter>,
    },
    /// Neither `parts` nor `chapters` was present as an array
    Unrecognized { title: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawPart {
    pub title: Option<String>,
    pub chapters: Vec<RawChapter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawChapter {
    Entry {
        number: Option<u32>,
        title: Option<String>,
        summary: Option<String>,
        subtopics: Vec<String>,
        sections: Vec<RawSection>,
    },
    /// A non-object array element, kept as its string form
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    pub number: Option<String>,
    pub title: String,
}

impl OutlineShape {
    pub fn decode(object: &Map<String, Value>) -> Self {
        let title = string_field(object, &["title", "book_title"]);

        if let Some(Value::Array(parts)) = object.get("parts") {
            return OutlineShape::Parts {
                title,
                parts: parts.iter().map(RawPart::decode).collect(),
            };
        }

        if let Some(Value::Array(chapters)) = object.get("chapters") {
            return OutlineShape::Chapters {
                title,
                chapters: chapters.iter().map(RawChapter::decode).collect(),
            };
        }

        OutlineShape::Unrecognized { title }
    }

    /// Whether the object carried at least one chapter entry
    pub fn has_chapters(&self) -> bool {
        match self {
            OutlineShape::Parts { parts, .. } => parts.iter().any(|p| !p.chapters.is_empty()),
            OutlineShape::Chapters { chapters, .. } => !chapters.is_empty(),
            OutlineShape::Unrecognized { .. } => false,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            OutlineShape::Parts { title, .. }
            | OutlineShape::Chapters { title, .. }
            | OutlineShape::Unrecognized { title } => title.as_deref(),
        }
    }
}

impl RawPart {
    fn decode(value: &Value) -> Self {
        match value {
            Value::Object(obj) => RawPart {
                title: string_field(obj, &["part_title", "title"]),
                chapters: match obj.get("chapters") {
                    Some(Value::Array(chapters)) => chapters.iter().map(RawChapter::decode).collect(),
                    _ => Vec::new(),
                },
            },
            _ => RawPart {
                title: None,
                chapters: Vec::new(),
            },
        }
    }
}

impl RawChapter {
    fn decode(value: &Value) -> Self {
        let obj = match value {
            Value::Object(obj) => obj,
            Value::String(s) => return RawChapter::Malformed(s.clone()),
            other => return RawChapter::Malformed(other.to_string()),
        };

        let subtopics = match obj.get("subtopics") {
            Some(Value::Array(items)) => items.iter().filter_map(item_title).collect(),
            _ => Vec::new(),
        };

        let sections = match obj.get("sections") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| {
                    let section = item.as_object()?;
                    Some(RawSection {
                        number: string_field(section, &["section_number"]),
                        title: string_field(section, &["section_title", "title"])?,
                    })
                })
                .collect(),
            _ => Vec::new(),
        };

        RawChapter::Entry {
            number: obj.get("chapter_number").and_then(chapter_number),
            title: string_field(obj, &["title", "chapter_title"]),
            summary: string_field(obj, &["summary", "description"]),
            subtopics,
            sections,
        }
    }
}

/// First non-empty string among `keys`
fn string_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .filter_map(|v| match v {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .find(|s| !s.is_empty())
}

fn item_title(item: &Value) -> Option<String> {
    match item {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(obj) => string_field(obj, &["title", "section_title", "name"]),
        _ => None,
    }
}

fn chapter_number(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    number.filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_decode_flat_chapters() {
        let shape = OutlineShape::decode(&object(json!({
            "title": "Rust",
            "chapters": [
                {"title": "Ownership", "summary": "Moves", "subtopics": ["borrow", {"title": "lifetimes"}, 3]},
                "Just a string",
                42
            ]
        })));

        let OutlineShape::Chapters { title, chapters } = shape else {
            panic!("expected flat chapters");
        };
        assert_eq!(title.as_deref(), Some("Rust"));
        assert_eq!(chapters.len(), 3);
        match &chapters[0] {
            RawChapter::Entry { subtopics, .. } => {
                assert_eq!(subtopics, &vec!["borrow".to_string(), "lifetimes".to_string()])
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(chapters[1], RawChapter::Malformed("Just a string".to_string()));
        assert_eq!(chapters[2], RawChapter::Malformed("42".to_string()));
    }

    #[test]
    fn test_parts_take_precedence() {
        let shape = OutlineShape::decode(&object(json!({
            "title": "Academic",
            "parts": [{"part_title": "PART I", "chapters": [
                {"chapter_number": "1", "chapter_title": "Intro", "sections": [
                    {"section_number": "1.1", "section_title": "Core"},
                    {"section_number": "1.2"}
                ]}
            ]}],
            "chapters": []
        })));

        let OutlineShape::Parts { parts, .. } = shape else {
            panic!("expected parts");
        };
        assert_eq!(parts[0].title.as_deref(), Some("PART I"));
        match &parts[0].chapters[0] {
            RawChapter::Entry {
                number, sections, ..
            } => {
                assert_eq!(*number, Some(1));
                assert_eq!(sections.len(), 1);
                assert_eq!(sections[0].title, "Core");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_keeps_title() {
        let shape = OutlineShape::decode(&object(json!({"title": "Lonely", "chapters": "nope"})));
        assert_eq!(shape, OutlineShape::Unrecognized { title: Some("Lonely".to_string()) });
        assert_eq!(shape.title(), Some("Lonely"));
    }

    #[test]
    fn test_has_chapters() {
        let error_body = OutlineShape::decode(&object(json!({"error": {"message": "Service Unavailable"}})));
        assert!(!error_body.has_chapters());

        let empty = OutlineShape::decode(&object(json!({"title": "T", "chapters": []})));
        assert!(!empty.has_chapters());

        let empty_parts = OutlineShape::decode(&object(json!({"parts": [{"chapters": []}]})));
        assert!(!empty_parts.has_chapters());

        let flat = OutlineShape::decode(&object(json!({"chapters": ["One"]})));
        assert!(flat.has_chapters());
    }

    #[test]
    fn test_chapter_number_variants() {
        assert_eq!(chapter_number(&json!(3)), Some(3));
        assert_eq!(chapter_number(&json!(" 7 ")), Some(7));
        assert_eq!(chapter_number(&json!("1.2")), None);
        assert_eq!(chapter_number(&json!(0)), None);
        assert_eq!(chapter_number(&json!(null)), None);
    }
}
