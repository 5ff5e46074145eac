use serde_json::Value;

use crate::error::AnalyzeError;

/// Validated `{ text }` request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    text: String,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Result<Self, AnalyzeError> {
        let text = text.into();
        if text.is_empty() {
            return Err(AnalyzeError::InvalidInput("text is empty".into()));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rejects bodies whose `text` is missing, not a string, or empty.
    /// Whitespace or punctuation alone is valid input.
    pub fn from_json(body: &Value) -> Result<Self, AnalyzeError> {
        match body.get("text") {
            None | Some(Value::Null) => Err(AnalyzeError::InvalidInput("text is missing".into())),
            Some(Value::String(text)) => Self::new(text.as_str()),
            Some(_) => Err(AnalyzeError::InvalidInput("text must be a string".into())),
        }
    }
}
