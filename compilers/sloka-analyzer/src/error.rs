use serde::Serialize;
use sloka_lexicon::LexiconError;

/// Caller-visible failures of a single analysis request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Invalid input text: {0}")]
    InvalidInput(String),
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

impl AnalyzeError {
    /// HTTP-style status for the response.
    pub fn status_code(&self) -> u16 {
        match self {
            AnalyzeError::InvalidInput(_) => 400,
            AnalyzeError::AnalysisFailed(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse { error: self.to_string() }
    }
}

/// `{ "error": message }` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The augmentation dataset could not be used. Logged, never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[cfg(feature = "fetch")]
    #[error("failed to fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("dataset server answered with status {0}")]
    Status(u16),
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset contains no usable rows")]
    Empty,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AnalyzeError::InvalidInput("text is missing".into()).status_code(), 400);
        assert_eq!(AnalyzeError::AnalysisFailed("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_error_body() {
        let body = serde_json::to_value(AnalyzeError::AnalysisFailed("boom".into()).to_response()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Analysis failed: boom" }));
    }
}
