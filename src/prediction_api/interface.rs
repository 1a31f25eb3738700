use crate::video_file::SelectedFile;
use serde::Deserialize;
use thiserror::Error;

pub const FALLBACK_PREDICT_ERROR: &str = "Failed to predict action. Please try again.";

/// Successful response body from the predict endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prediction {
    pub action: String,
    #[serde(default)]
    pub confidence: Option<f32>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("could not read video file: {0}")]
    ReadFile(String),
}

impl ApiError {
    /// The message shown to the user: the server-provided detail when
    /// there is one, otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_PREDICT_ERROR.to_string(),
        }
    }
}

pub trait PredictionApi: Send + Sync {
    fn predict_action(&self, file: &SelectedFile) -> Result<Prediction, ApiError>;
}
