//! Request envelope for the Gemini `generateContent` endpoint.

use serde::Serialize;

/// Model name sent in every generate request.
pub const GEMINI_MODEL: &str = "gemini-2.5-pro";

/// Top-level request body: `{ model, contents: [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub contents: Vec<Content>,
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// One text fragment within a turn.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateRequest {
    /// Build the fixed envelope: a single user-role message carrying `prompt`.
    pub fn user_prompt(prompt: impl Into<String>) -> Self {
        Self {
            model: GEMINI_MODEL.to_owned(),
            contents: vec![Content {
                role: "user".to_owned(),
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}
