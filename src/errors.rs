use geocoding::GeocodingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    #[error("Failed to geocode address: {0}")]
    Geocode(String),

    #[error("Failed to write CSV output: {0}")]
    Csv(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for PipelineError {
    fn from(error: reqwest::Error) -> Self {
        PipelineError::Http(error.to_string())
    }
}

impl From<url::ParseError> for PipelineError {
    fn from(error: url::ParseError) -> Self {
        PipelineError::Parse(error.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(error: serde_json::Error) -> Self {
        PipelineError::Parse(error.to_string())
    }
}

impl From<GeocodingError> for PipelineError {
    fn from(error: GeocodingError) -> Self {
        PipelineError::Geocode(error.to_string())
    }
}

impl From<csv::Error> for PipelineError {
    fn from(error: csv::Error) -> Self {
        PipelineError::Csv(error.to_string())
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(error: std::io::Error) -> Self {
        PipelineError::Csv(error.to_string())
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(error: tokio::task::JoinError) -> Self {
        PipelineError::Task(error.to_string())
    }
}
