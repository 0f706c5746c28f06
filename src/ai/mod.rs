//! Gemini request construction and the outbound call

pub mod client;
pub mod prompt;

// Re-export main types for convenience
pub use client::GeminiClient;
pub use prompt::{SYSTEM_PROMPT, build_user_query};
