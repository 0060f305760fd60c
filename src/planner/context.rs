//! Reference context handling shared by every generation step

use super::prompts::REFERENCE_PREFIX;
use crate::provider::ChatMessage;

pub const TRUNCATION_MARKER: &str = "\n...[truncated]";

/// Cut `text` to at most `max_chars` characters, appending a marker when anything was dropped
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            tracing::info!(
                "Truncating context from {} to {} chars",
                text.chars().count(),
                max_chars
            );
            format!("{}{}", &text[..byte_idx], TRUNCATION_MARKER)
        }
        None => text.to_string(),
    }
}

/// Append caller-supplied material to the reference context with an instruction to use it
pub fn with_additional_content(reference: &str, additional: Option<&str>) -> String {
    match additional.map(str::trim).filter(|s| !s.is_empty()) {
        Some(extra) => format!(
            "{}\n\nUSER PROVIDED ADDITIONAL CONTENT:\n{}\n\nPlease incorporate these specific ideas \
             and content into the book structure and chapter planning.",
            reference, extra
        ),
        None => reference.to_string(),
    }
}

/// Build the message sequence: system, optional reference context as a prior assistant turn, user
pub fn compose_messages(
    system: &str,
    reference: &str,
    max_context_chars: usize,
    user: String,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(system)];

    if !reference.trim().is_empty() {
        let reference = truncate_chars(reference, max_context_chars);
        messages.push(ChatMessage::assistant(format!(
            "{}\n\n{}",
            REFERENCE_PREFIX, reference
        )));
    }

    messages.push(ChatMessage::user(user));
    tracing::debug!(
        "Composed {} messages, {} chars total",
        messages.len(),
        messages.iter().map(|m| m.content.len()).sum::<usize>()
    );
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Role;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_appends_marker() {
        let text = "x".repeat(9000);
        let cut = truncate_chars(&text, 8000);
        assert!(cut.ends_with(TRUNCATION_MARKER));
        assert_eq!(cut.len(), 8000 + TRUNCATION_MARKER.len());
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(20);
        let cut = truncate_chars(&text, 10);
        assert!(cut.starts_with(&"é".repeat(10)));
        assert!(cut.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_additional_content_appended() {
        let combined = with_additional_content("TOC A", Some("Cover error handling"));
        assert!(combined.starts_with("TOC A"));
        assert!(combined.contains("USER PROVIDED ADDITIONAL CONTENT:\nCover error handling"));
        assert!(combined.contains("Please incorporate"));

        assert_eq!(with_additional_content("TOC A", Some("   ")), "TOC A");
        assert_eq!(with_additional_content("TOC A", None), "TOC A");
    }

    #[test]
    fn test_compose_messages_skips_empty_reference() {
        let messages = compose_messages("sys", "  ", 100, "task".to_string());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_compose_messages_truncates_reference() {
        let reference = "r".repeat(50);
        let messages = compose_messages("sys", &reference, 10, "task".to_string());
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(messages[1].content.starts_with(REFERENCE_PREFIX));
        assert!(messages[1].content.ends_with(TRUNCATION_MARKER));
    }
}
