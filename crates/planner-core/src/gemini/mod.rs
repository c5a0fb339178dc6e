//! Gemini `generateContent` dispatch: request envelope, HTTP client, and
//! response-text extraction.

pub mod client;
pub mod extract;
pub mod types;

pub use client::{GeminiClient, GeminiConfig, GenerateError};
pub use extract::{ResponseShapeError, extract_generated_text};
pub use types::{Content, GEMINI_MODEL, GenerateRequest, Part};
