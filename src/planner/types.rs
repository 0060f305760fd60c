//! Types shared by the outline pipeline and the chapter writer

use serde::{Deserialize, Serialize};

/// One planned chapter: numbered title, short summary, a few subtopics
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChapterPlan {
    /// Always of the form "Chapter <n>: <text>"
    pub title: String,

    #[serde(default)]
    pub summary: String,

    /// At most five entries
    #[serde(default)]
    pub subtopics: Vec<String>,
}

/// Book title plus its ordered chapter plans
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookOutline {
    pub title: String,
    pub chapters: Vec<ChapterPlan>,
}

/// Prose for a single chapter, as an HTML fragment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChapterContent {
    pub title: String,
    pub content: String,
}

/// A fully written book
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookContent {
    pub title: String,
    pub chapters: Vec<ChapterContent>,
}

/// Rhetorical style of the prompts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Casual,
    Formal,
    Academic,
    Storytelling,
}

impl Tone {
    /// Parse a tone name; anything unrecognized is casual
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "formal" => Tone::Formal,
            "academic" => Tone::Academic,
            "storytelling" => Tone::Storytelling,
            _ => Tone::Casual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Formal => "formal",
            Tone::Academic => "academic",
            Tone::Storytelling => "storytelling",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editorial emphasis used to diversify candidate outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Perspective {
    Foundational,
    Applied,
    Strategic,
    FutureOriented,
}

impl Perspective {
    /// Generation order used by the orchestrator
    pub const ALL: [Perspective; 4] = [
        Perspective::Foundational,
        Perspective::Applied,
        Perspective::Strategic,
        Perspective::FutureOriented,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Perspective::Foundational => "foundational",
            Perspective::Applied => "applied",
            Perspective::Strategic => "strategic",
            Perspective::FutureOriented => "future-oriented",
        }
    }

    /// Extra instruction appended to the user prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            Perspective::Foundational => {
                "PERSPECTIVE: Emphasize foundational understanding. Weight the outline toward core \
                 concepts, definitions, history and the theory a newcomer needs before anything else."
            }
            Perspective::Applied => {
                "PERSPECTIVE: Emphasize practical application. Weight the outline toward hands-on \
                 techniques, tools, worked examples and implementation guidance."
            }
            Perspective::Strategic => {
                "PERSPECTIVE: Emphasize strategic impact. Weight the outline toward decision making, \
                 organizational adoption, business value, risk and governance."
            }
            Perspective::FutureOriented => {
                "PERSPECTIVE: Emphasize the future. Weight the outline toward emerging trends, open \
                 research problems, likely developments and how readers can prepare for them."
            }
        }
    }
}

impl std::fmt::Display for Perspective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
