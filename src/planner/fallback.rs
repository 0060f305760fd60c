//! Deterministic, network-free outlines used whenever model output is unusable

use super::types::{BookOutline, ChapterPlan};

/// A themed chapter template. `{topic}` in the summary is replaced with the book topic.
#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    pub theme: &'static str,
    pub summary: &'static str,
    pub subtopics: [&'static str; 4],
}

const CORE_ARCHETYPES: [Archetype; 12] = [
    Archetype {
        theme: "Foundations and Fundamentals",
        summary: "Introduces the essential vocabulary, history and core ideas of {topic}, giving readers a solid base for everything that follows.",
        subtopics: ["Key terminology", "Historical background", "Why it matters today", "Common misconceptions"],
    },
    Archetype {
        theme: "Core Principles and Concepts",
        summary: "Explains the central principles that govern {topic} and how they fit together into a coherent mental model.",
        subtopics: ["First principles", "Conceptual models", "Relationships between ideas", "Worked illustrations"],
    },
    Archetype {
        theme: "Essential Tools and Methods",
        summary: "Surveys the methods, tools and frameworks practitioners rely on when working with {topic}.",
        subtopics: ["Standard methods", "Tooling landscape", "Choosing the right approach", "Getting set up"],
    },
    Archetype {
        theme: "Practical Implementation",
        summary: "Walks through applying {topic} step by step, from a first prototype to a dependable result.",
        subtopics: ["Planning the work", "Step-by-step walkthrough", "Testing and validation", "Common pitfalls"],
    },
    Archetype {
        theme: "Case Studies and Examples",
        summary: "Examines real-world examples of {topic} in action and the lessons each one teaches.",
        subtopics: ["Success stories", "Instructive failures", "Comparative analysis", "Lessons learned"],
    },
    Archetype {
        theme: "Advanced Techniques",
        summary: "Builds on the basics with advanced techniques that experienced practitioners use to get more out of {topic}.",
        subtopics: ["Beyond the basics", "Optimization strategies", "Expert heuristics", "Combining techniques"],
    },
    Archetype {
        theme: "Scaling and Optimization",
        summary: "Covers how {topic} behaves at scale and the techniques that keep it efficient and reliable as demands grow.",
        subtopics: ["Performance considerations", "Scaling patterns", "Resource management", "Monitoring and tuning"],
    },
    Archetype {
        theme: "Industry Applications",
        summary: "Explores how different industries put {topic} to work and what distinguishes each setting.",
        subtopics: ["Sector overviews", "Domain-specific constraints", "Adoption patterns", "Measuring impact"],
    },
    Archetype {
        theme: "Challenges and Limitations",
        summary: "Confronts the open problems, trade-offs and limitations that still constrain {topic}.",
        subtopics: ["Technical barriers", "Practical trade-offs", "Known failure modes", "Mitigation strategies"],
    },
    Archetype {
        theme: "Ethics and Responsibility",
        summary: "Considers the ethical, social and governance questions raised by {topic} and how to address them responsibly.",
        subtopics: ["Ethical frameworks", "Risk and accountability", "Regulation and policy", "Responsible practice"],
    },
    Archetype {
        theme: "Emerging Trends",
        summary: "Highlights the newest developments in {topic} and the research directions attracting the most attention.",
        subtopics: ["Recent breakthroughs", "Active research areas", "New tools and platforms", "Signals to watch"],
    },
    Archetype {
        theme: "Future Directions",
        summary: "Looks ahead at where {topic} is heading and offers a roadmap for readers who want to keep growing.",
        subtopics: ["Long-term outlook", "Opportunities ahead", "Skills to develop", "Next steps for readers"],
    },
];

const ADVANCED_ARCHETYPES: [Archetype; 6] = [
    Archetype {
        theme: "Advanced Theory",
        summary: "Takes a deeper theoretical look at {topic}, formalizing ideas introduced earlier in the book.",
        subtopics: ["Formal models", "Proof sketches and arguments", "Theoretical limits", "Open theoretical questions"],
    },
    Archetype {
        theme: "Research Frontiers",
        summary: "Maps the research frontier of {topic}, summarizing the most promising unsolved problems.",
        subtopics: ["State of the art", "Unsolved problems", "Research methods", "Key publications"],
    },
    Archetype {
        theme: "Interdisciplinary Connections",
        summary: "Connects {topic} to neighbouring fields and shows how ideas flow between them.",
        subtopics: ["Related disciplines", "Borrowed techniques", "Cross-field collaboration", "Hybrid approaches"],
    },
    Archetype {
        theme: "Specialized Applications",
        summary: "Examines niche and specialized applications of {topic} that demand tailored approaches.",
        subtopics: ["Niche domains", "Custom solutions", "Constraint-driven design", "Evaluation in context"],
    },
    Archetype {
        theme: "Expert Perspectives",
        summary: "Gathers the viewpoints and practices of leading experts in {topic} and contrasts their approaches.",
        subtopics: ["Schools of thought", "Expert practices", "Points of debate", "Building expertise"],
    },
    Archetype {
        theme: "Synthesis and Mastery",
        summary: "Brings together the threads of the book to help readers achieve lasting mastery of {topic}.",
        subtopics: ["Connecting the threads", "Capstone exercises", "Continuing education", "Mastery checklist"],
    },
];

/// Builds outlines and individual chapters from a fixed archetype table.
///
/// Positions 1 through 12 map to the core archetypes; higher positions cycle
/// through the advanced ones. Output depends only on the arguments.
#[derive(Debug, Clone, Copy)]
pub struct FallbackPlanBuilder {
    core: &'static [Archetype],
    advanced: &'static [Archetype],
}

impl Default for FallbackPlanBuilder {
    fn default() -> Self {
        Self {
            core: &CORE_ARCHETYPES,
            advanced: &ADVANCED_ARCHETYPES,
        }
    }
}

impl FallbackPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title used whenever no better title is available
    pub fn book_title(&self, topic: &str) -> String {
        format!("The Complete Guide to {}", topic)
    }

    /// A whole outline with exactly `num_chapters` chapters
    pub fn build(&self, topic: &str, num_chapters: usize) -> BookOutline {
        BookOutline {
            title: self.book_title(topic),
            chapters: (1..=num_chapters)
                .map(|position| self.chapter(topic, position))
                .collect(),
        }
    }

    /// The chapter for a 1-based position
    pub fn chapter(&self, topic: &str, position: usize) -> ChapterPlan {
        let archetype = self.archetype(position);
        ChapterPlan {
            title: format!("Chapter {}: {} in {}", position, archetype.theme, topic),
            summary: archetype.summary.replace("{topic}", topic),
            subtopics: archetype.subtopics.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Append fallback chapters until the outline has `num_chapters`, then cut any excess
    pub fn pad_and_truncate(&self, chapters: &mut Vec<ChapterPlan>, topic: &str, num_chapters: usize) {
        while chapters.len() < num_chapters {
            let position = chapters.len() + 1;
            chapters.push(self.chapter(topic, position));
        }
        chapters.truncate(num_chapters);
    }

    fn archetype(&self, position: usize) -> &Archetype {
        let position = position.max(1);
        if position <= self.core.len() {
            &self.core[position - 1]
        } else {
            &self.advanced[(position - 1) % self.advanced.len()]
        }
    }
}
