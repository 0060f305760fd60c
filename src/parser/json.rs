use regex::Regex;
use serde_json::{Map, Value};

const FENCED_OBJECT: &str = r"```(?:json)?\s*(\{[\s\S]*\})\s*```";

/// Extract a JSON object from model output that may carry prose or markdown fences.
///
/// Tried in order, first success wins:
/// 1. the whole text
/// 2. a fenced code block (optionally tagged `json`) holding a `{...}` span
/// 3. the span from the first `{` to the last `}`
///
/// No repair is attempted; anything that fails all three yields `None`.
pub fn extract_json(text: &str) -> Option<Map<String, Value>> {
    if text.trim().is_empty() {
        return None;
    }

    if let Some(object) = parse_object(text) {
        return Some(object);
    }

    if let Ok(re) = Regex::new(FENCED_OBJECT) {
        if let Some(object) = re
            .captures(text)
            .and_then(|cap| cap.get(1))
            .and_then(|m| parse_object(m.as_str()))
        {
            return Some(object);
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        if let Some(object) = parse_object(&text[start..=end]) {
            return Some(object);
        }
    }

    tracing::debug!(
        "No JSON object found in output: {}...",
        text.chars().take(200).collect::<String>()
    );
    None
}

fn parse_object(s: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(s.trim()) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_json() {
        let obj = extract_json(r#"{"title": "Rust", "chapters": []}"#).unwrap();
        assert_eq!(obj["title"], "Rust");
    }

    #[test]
    fn test_fenced_with_language_tag() {
        let text = r#"
Here is your outline:

```json
{"title": "Fenced", "chapters": [{"title": "One"}]}
```

Let me know if you need changes.
"#;
        let obj = extract_json(text).unwrap();
        assert_eq!(obj["title"], "Fenced");
        assert_eq!(obj["chapters"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_fenced_without_tag() {
        let text = "```\n{\"title\": \"Plain fence\"}\n```";
        assert_eq!(extract_json(text).unwrap()["title"], "Plain fence");
    }

    #[test]
    fn test_prose_around_object() {
        let text = r#"Sure! {"title": "Embedded", "chapters": [{"title": "A"}, {"title": "B"}]} Hope this helps."#;
        let obj = extract_json(text).unwrap();
        assert_eq!(obj["title"], "Embedded");
    }

    #[test]
    fn test_no_braces() {
        assert!(extract_json("I cannot help with that request.").is_none());
        assert!(extract_json("").is_none());
    }

    #[test]
    fn test_truncated_json() {
        assert!(extract_json(r#"{"title": "Cut off", "chapters": [{"title": "#).is_none());
    }

    #[test]
    fn test_invalid_json_not_repaired() {
        assert!(extract_json(r#"{"title": "Trailing", "chapters": [],}"#).is_none());
        assert!(extract_json("{'title': 'single quotes'}").is_none());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(extract_json(r#"["a", "b"]"#).is_none());
    }
}
