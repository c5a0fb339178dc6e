//! Extraction of generated text from the Gemini response envelope.
//!
//! The interesting payload sits at `candidates[0].content.parts[0].text`.
//! Navigation is lenient about *absence*: a missing candidate or part list
//! means the model produced nothing and yields an empty string. A wrong
//! *type* at any level is a [`ResponseShapeError`] naming the level that was
//! malformed.

use serde_json::Value;
use thiserror::Error;

/// The response could not be navigated to its text payload.
#[derive(Debug, Error)]
pub enum ResponseShapeError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("`candidates` is not an array")]
    CandidatesNotArray,

    #[error("first candidate has no `content` object")]
    MissingContent,

    #[error("`content.parts` is not an array")]
    PartsNotArray,

    #[error("first part has no `text` string")]
    MissingText,
}

/// Pull the first candidate's first text part out of a generate response.
///
/// Returns `Ok("")` when the envelope is well-formed but carries no
/// candidates or parts; callers treat that as "no tasks", not a failure.
pub fn extract_generated_text(response: &Value) -> Result<String, ResponseShapeError> {
    let Some(body) = response.as_object() else {
        return Err(ResponseShapeError::NotAnObject);
    };

    let Some(candidates) = body.get("candidates") else {
        return Ok(String::new());
    };
    let candidates = candidates
        .as_array()
        .ok_or(ResponseShapeError::CandidatesNotArray)?;
    let Some(first_candidate) = candidates.first() else {
        return Ok(String::new());
    };

    let content = first_candidate
        .get("content")
        .and_then(Value::as_object)
        .ok_or(ResponseShapeError::MissingContent)?;

    let Some(parts) = content.get("parts") else {
        return Ok(String::new());
    };
    let parts = parts.as_array().ok_or(ResponseShapeError::PartsNotArray)?;
    let Some(first_part) = parts.first() else {
        return Ok(String::new());
    };

    first_part
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ResponseShapeError::MissingText)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_text_part() {
        let response = json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "1. Do the thing" },
                            { "text": "ignored second part" }
                        ]
                    }
                },
                { "content": { "parts": [ { "text": "ignored second candidate" } ] } }
            ]
        });

        let text = extract_generated_text(&response).expect("should extract");
        assert_eq!(text, "1. Do the thing");
    }

    #[test]
    fn non_object_response_is_shape_error() {
        let err = extract_generated_text(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, ResponseShapeError::NotAnObject));

        let err = extract_generated_text(&json!("plain string")).unwrap_err();
        assert!(matches!(err, ResponseShapeError::NotAnObject));
    }

    #[test]
    fn missing_candidates_key_yields_empty_text() {
        // An otherwise well-formed object without candidates is the lenient
        // "model produced nothing" case.
        let text = extract_generated_text(&json!({ "promptFeedback": {} })).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn empty_candidates_yields_empty_text() {
        let text = extract_generated_text(&json!({ "candidates": [] })).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn wrong_typed_candidates_is_shape_error() {
        let err = extract_generated_text(&json!({ "candidates": "nope" })).unwrap_err();
        assert!(matches!(err, ResponseShapeError::CandidatesNotArray));
    }

    #[test]
    fn candidate_without_content_is_shape_error() {
        let err = extract_generated_text(&json!({ "candidates": [ {} ] })).unwrap_err();
        assert!(matches!(err, ResponseShapeError::MissingContent));

        let err =
            extract_generated_text(&json!({ "candidates": [ { "content": 7 } ] })).unwrap_err();
        assert!(matches!(err, ResponseShapeError::MissingContent));
    }

    #[test]
    fn missing_parts_yields_empty_text() {
        let text = extract_generated_text(&json!({ "candidates": [ { "content": {} } ] })).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn empty_parts_yields_empty_text() {
        let response = json!({ "candidates": [ { "content": { "parts": [] } } ] });
        assert_eq!(extract_generated_text(&response).unwrap(), "");
    }

    #[test]
    fn wrong_typed_parts_is_shape_error() {
        let response = json!({ "candidates": [ { "content": { "parts": { "a": 1 } } } ] });
        let err = extract_generated_text(&response).unwrap_err();
        assert!(matches!(err, ResponseShapeError::PartsNotArray));
    }

    #[test]
    fn part_without_text_is_shape_error() {
        let response = json!({ "candidates": [ { "content": { "parts": [ {} ] } } ] });
        let err = extract_generated_text(&response).unwrap_err();
        assert!(matches!(err, ResponseShapeError::MissingText));

        let response = json!({ "candidates": [ { "content": { "parts": [ { "text": 42 } ] } } ] });
        let err = extract_generated_text(&response).unwrap_err();
        assert!(matches!(err, ResponseShapeError::MissingText));
    }
}
