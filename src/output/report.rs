use crate::error::OutputError;
use crate::planner::{BookContent, BookOutline};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the outline as pretty JSON, creating parent directories
pub fn write_outline(path: &Path, outline: &BookOutline) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(OutputError::CreateDir)?;
    }

    let json = serde_json::to_string_pretty(outline)?;
    fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote outline to {}", path.display());
    Ok(())
}

pub fn read_outline(path: &Path) -> Result<BookOutline, OutputError> {
    let content = fs::read_to_string(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Write `book.json` and `book.html` into `dir`, returning the HTML path
pub fn write_book(dir: &Path, book: &BookContent) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(dir).map_err(OutputError::CreateDir)?;

    let json_path = dir.join("book.json");
    let json = serde_json::to_string_pretty(book)?;
    fs::write(&json_path, json).map_err(|source| OutputError::Write {
        path: json_path.clone(),
        source,
    })?;

    let html_path = dir.join("book.html");
    fs::write(&html_path, render_book_html(book)).map_err(|source| OutputError::Write {
        path: html_path.clone(),
        source,
    })?;

    info!(
        "Wrote {} chapters to {}",
        book.chapters.len(),
        dir.display()
    );
    Ok(html_path)
}

/// Standalone HTML document. Chapter content is an HTML fragment and goes in verbatim.
pub fn render_book_html(book: &BookContent) -> String {
    let title = escape_html(&book.title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));

    for chapter in &book.chapters {
        html.push_str("<section class=\"chapter\">\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&chapter.title)));
        html.push_str(chapter.content.trim());
        html.push_str("\n</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
