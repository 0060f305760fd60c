use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from("books")
}

pub fn default_max_chapters() -> usize {
    50
}

pub fn default_groq_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

pub fn default_ollama_model() -> String {
    "mistral:latest".to_string()
}

pub fn default_groq_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

pub fn default_ollama_base_url() -> String {
    "http://localhost:11434".to_string()
}

pub fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

pub fn default_planning_temperature() -> f32 {
    0.35
}

pub fn default_merge_temperature() -> f32 {
    0.3
}

pub fn default_critique_temperature() -> f32 {
    0.3
}

pub fn default_planning_timeout_sec() -> u64 {
    30
}

pub fn default_max_context_chars() -> usize {
    8000
}

pub fn default_max_candidates_chars() -> usize {
    12000
}

pub fn default_writing_temperature() -> f32 {
    0.7
}

pub fn default_writing_timeout_sec() -> u64 {
    40
}
