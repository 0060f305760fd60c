//! Recovering structured outlines from free-text model output

mod json;
mod outline;

pub use json::extract_json;
pub use outline::{OutlineShape, RawChapter, RawSection};
