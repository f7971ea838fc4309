use std::time::Duration;

use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

use super::{ImageUpload, PredictionBackend};
use crate::config::default_user_agent;
use crate::model::PredictionResult;
use crate::PredictError;

/// Posts images to the prediction API as multipart form data
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, PredictError> {
        Self::with_user_agent(endpoint, timeout, None)
    }

    /// Like [`HttpBackend::new`], sending `user_agent` instead of the crate's default
    pub fn with_user_agent(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: Option<String>,
    ) -> Result<Self, PredictError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let user_agent = user_agent.unwrap_or_else(default_user_agent);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl PredictionBackend for HttpBackend {
    async fn predict(&self, image: &ImageUpload) -> Result<PredictionResult, PredictError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime_type())?;
        let form = Form::new().part("file", part);

        debug!("Uploading {} to {}", image.file_name, self.endpoint);

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Prediction API returned {}", status);
            return Err(PredictError::ApiError {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        debug!("Prediction API response: {}", body);
        PredictionResult::from_json(&body)
    }
}

/// Pull the `error` field out of an error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json["error"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}
