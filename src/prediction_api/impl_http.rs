use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::prediction_api::interface::{ApiError, Prediction, PredictionApi};
use crate::video_file::SelectedFile;
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use std::sync::Arc;

/// Client for the remote action-recognition service. One blocking POST
/// per call, no retries.
pub struct PredictionApiHttp {
    base_url: String,
    http: Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionApiHttp {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|error| ApiError::Network(error.to_string()))?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http,
            logger: logger.with_namespace("api"),
        })
    }
}

impl PredictionApi for PredictionApiHttp {
    fn predict_action(&self, file: &SelectedFile) -> Result<Prediction, ApiError> {
        let bytes =
            std::fs::read(&file.path).map_err(|error| ApiError::ReadFile(error.to_string()))?;

        let part = multipart::Part::bytes(bytes)
            .mime_str(&file.media_type)
            .map_err(|error| ApiError::Network(error.to_string()))?
            .file_name(file.name.clone());
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}/predict", self.base_url);
        let _ = self.logger.info(&format!("POST {} ({})", url, file.name));

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .map_err(|error| ApiError::Network(error.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .map_err(|error| ApiError::Network(error.to_string()))
        } else {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            let _ = self
                .logger
                .error(&format!("predict returned status {}", status));

            Err(ApiError::Status {
                status,
                detail: detail_from_body(&body),
            })
        }
    }
}

/// FastAPI-style error bodies carry the message in a `detail` field.
fn detail_from_body(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
}
