use crate::planner::BookOutline;

const RULE_WIDTH: usize = 68;

/// Boxed, human-readable outline for the terminal
pub fn render_outline(outline: &BookOutline) -> String {
    let header = format!("┌─ {} ({} chapters) ", outline.title, outline.chapters.len());
    let pad = RULE_WIDTH.saturating_sub(header.chars().count());

    let mut out = format!("{}{}┐\n", header, "─".repeat(pad));
    for chapter in &outline.chapters {
        out.push_str(&format!("│ {}\n", chapter.title));
        if !chapter.summary.is_empty() {
            out.push_str(&format!("│    {}\n", chapter.summary));
        }
        if !chapter.subtopics.is_empty() {
            out.push_str(&format!("│    → {}\n", chapter.subtopics.join(", ")));
        }
    }
    out.push_str(&format!("└{}┘\n", "─".repeat(RULE_WIDTH - 1)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{ChapterPlan, FallbackPlanBuilder};

    #[test]
    fn test_lists_every_chapter() {
        let outline = FallbackPlanBuilder::new().build("Rust", 3);
        let text = render_outline(&outline);
        assert!(text.starts_with("┌─ The Complete Guide to Rust (3 chapters) "));
        for chapter in &outline.chapters {
            assert!(text.contains(&format!("│ {}\n", chapter.title)));
        }
        assert!(text.trim_end().ends_with('┘'));
    }

    #[test]
    fn test_skips_empty_fields() {
        let outline = BookOutline {
            title: "Bare".to_string(),
            chapters: vec![ChapterPlan {
                title: "Chapter 1: Alone".to_string(),
                summary: String::new(),
                subtopics: Vec::new(),
            }],
        };
        let text = render_outline(&outline);
        assert_eq!(text.lines().count(), 3);
    }
}
