//! Files and terminal output for outlines and written books

mod report;
mod summary;

pub use report::{read_outline, write_book, write_outline};
pub use summary::render_outline;

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

const SLUG_WORDS: usize = 5;

/// `<base>/<date>-<slug>` for a topic
pub fn book_dir(base: &Path, topic: &str, date: NaiveDate) -> PathBuf {
    base.join(format!("{}-{}", date.format("%Y-%m-%d"), slugify(topic)))
}

/// First few alphanumeric words, lower-cased and dash-joined
pub fn slugify(topic: &str) -> String {
    let words: Vec<String> = topic
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .take(SLUG_WORDS)
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        "book".to_string()
    } else {
        words.join("-")
    }
}
