use thiserror::Error;

/// Errors that can occur while obtaining a prediction
#[derive(Error, Debug)]
pub enum PredictError {
    /// Failed to reach the prediction API
    #[error("Failed to contact prediction API: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The prediction API answered with a non-success HTTP status
    #[error("Prediction API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The response body could not be turned into a prediction
    #[error("Invalid prediction response: {0}")]
    InvalidResponse(String),

    /// The image to upload is missing or empty
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Failed to read the image from disk
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Base64 image data could not be decoded
    #[error("Failed to decode base64 image: {0}")]
    DecodeError(#[from] base64::DecodeError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        PredictError::InvalidResponse(err.to_string())
    }
}
