//! Content synthesized when the backend is rate limited

use super::client::RequestKind;
use crate::planner::FallbackPlanBuilder;

/// Produce text shaped like what the request asked for
pub fn synthesize(kind: &RequestKind, excerpt: &str, builder: &FallbackPlanBuilder) -> String {
    match kind {
        RequestKind::Outline {
            topic,
            num_chapters,
        } => match serde_json::to_string_pretty(&builder.build(topic, *num_chapters)) {
            Ok(json) => json,
            Err(_) => generic(excerpt),
        },
        RequestKind::Chapter { topic } => chapter_html(topic),
        RequestKind::General => generic(excerpt),
    }
}

fn generic(excerpt: &str) -> String {
    format!("[FALLBACK_CONTENT]\n{}", excerpt)
}

fn chapter_html(topic: &str) -> String {
    let sections: [(&str, String); 7] = [
        (
            "INTRODUCTION",
            format!(
                "This chapter provides a comprehensive exploration of {topic}, examining its fundamental \
                 principles and practical applications. As we delve into this important subject, we will \
                 uncover the key concepts that make it relevant in today's rapidly evolving landscape."
            ),
        ),
        (
            "CORE CONCEPTS",
            format!(
                "The foundation of {topic} rests upon several critical pillars that shape our understanding \
                 and implementation. These core concepts form the bedrock upon which more advanced \
                 applications are built, providing essential context for practitioners and researchers alike."
            ),
        ),
        (
            "IN-DEPTH ANALYSIS",
            format!(
                "A deeper examination reveals the mechanisms and underlying processes that drive {topic}. \
                 The analysis encompasses both theoretical frameworks and practical implementations, offering \
                 insight into how {topic} continues to evolve and adapt to changing requirements."
            ),
        ),
        (
            "APPLICATIONS AND EXAMPLES",
            format!(
                "Real-world applications of {topic} demonstrate its versatility and impact across multiple \
                 industries. Organizations are discovering innovative ways to apply these concepts for improved \
                 outcomes, from automated systems to data-driven decision making."
            ),
        ),
        (
            "CHALLENGES AND OPEN QUESTIONS",
            format!(
                "Despite significant progress, several challenges remain in the field of {topic}. Current \
                 limitations include scalability concerns, integration complexities, and the need for \
                 standardized approaches across different implementations."
            ),
        ),
        (
            "FUTURE DIRECTIONS",
            format!(
                "The future of {topic} appears promising, with emerging trends pointing toward more \
                 intelligent, adaptive, and user-centric solutions that address current limitations while \
                 opening new possibilities for innovation."
            ),
        ),
        (
            "CONCLUSION",
            format!(
                "This chapter has provided an overview of {topic}, covering its fundamental concepts, \
                 practical applications, and future potential. The insights presented here form a foundation \
                 for deeper exploration in subsequent chapters."
            ),
        ),
    ];

    sections
        .iter()
        .enumerate()
        .map(|(i, (heading, body))| {
            let tag = if i == 0 { "h1" } else { "h2" };
            format!("<{tag}>{heading}</{tag}>\n<p>{body}</p>")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_json;

    #[test]
    fn test_outline_fallback_is_parseable_outline() {
        let text = synthesize(
            &RequestKind::Outline {
                topic: "Rust".to_string(),
                num_chapters: 3,
            },
            "excerpt",
            &FallbackPlanBuilder::new(),
        );
        let object = extract_json(&text).unwrap();
        assert_eq!(object["title"], "The Complete Guide to Rust");
        assert_eq!(object["chapters"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_chapter_fallback_has_all_sections() {
        let html = synthesize(
            &RequestKind::Chapter {
                topic: "Rust".to_string(),
            },
            "excerpt",
            &FallbackPlanBuilder::new(),
        );
        assert!(html.starts_with("<h1>INTRODUCTION</h1>"));
        assert_eq!(html.matches("<h2>").count(), 6);
        assert!(html.contains("<h2>CONCLUSION</h2>"));
        assert!(html.contains("Rust"));
    }

    #[test]
    fn test_general_fallback_tags_excerpt() {
        let text = synthesize(&RequestKind::General, "system: hi", &FallbackPlanBuilder::new());
        assert_eq!(text, "[FALLBACK_CONTENT]\nsystem: hi");
    }
}
