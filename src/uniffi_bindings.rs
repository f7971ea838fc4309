//! UniFFI bindings for letthemcook
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{Language, PredictError, PredictionResult, ResultFormatter, Status};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible label language
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiLanguage {
    Indonesian,
    English,
}

impl From<FfiLanguage> for Language {
    fn from(language: FfiLanguage) -> Self {
        match language {
            FfiLanguage::Indonesian => Language::Indonesian,
            FfiLanguage::English => Language::English,
        }
    }
}

/// FFI-compatible prediction record
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiPrediction {
    pub success: bool,
    pub predicted_name: String,
    pub confidence: f64,
    /// Empty string if none
    pub calories_per_serving: String,
    /// Empty string if none
    pub main_ingredients: String,
    /// Empty string if none
    pub recipe_steps: String,
    /// Empty string if none
    pub error: String,
}

impl From<PredictionResult> for FfiPrediction {
    fn from(result: PredictionResult) -> Self {
        FfiPrediction {
            success: result.is_success(),
            predicted_name: result.predicted_name,
            confidence: result.confidence,
            calories_per_serving: result.calories_per_serving.unwrap_or_default(),
            main_ingredients: result.main_ingredients.unwrap_or_default(),
            recipe_steps: result.recipe_steps.unwrap_or_default(),
            error: result.error.unwrap_or_default(),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl From<FfiPrediction> for PredictionResult {
    fn from(ffi: FfiPrediction) -> Self {
        PredictionResult {
            status: if ffi.success {
                Status::Success
            } else {
                Status::Failure
            },
            predicted_name: ffi.predicted_name,
            confidence: ffi.confidence,
            calories_per_serving: non_empty(ffi.calories_per_serving),
            main_ingredients: non_empty(ffi.main_ingredients),
            recipe_steps: non_empty(ffi.recipe_steps),
            error: non_empty(ffi.error),
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiPredictError {
    /// Network failure or non-success HTTP status
    FetchError { message: String },
    /// Response body is not a valid prediction
    InvalidResponse { message: String },
    /// Image missing, empty or undecodable
    InvalidImage { message: String },
    /// Builder or configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiPredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiPredictError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiPredictError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            FfiPredictError::InvalidImage { message } => write!(f, "Invalid image: {}", message),
            FfiPredictError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiPredictError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiPredictError {}

impl From<PredictError> for FfiPredictError {
    fn from(err: PredictError) -> Self {
        let message = err.to_string();
        match err {
            PredictError::FetchError(_) | PredictError::ApiError { .. } => {
                FfiPredictError::FetchError { message }
            }
            PredictError::InvalidResponse(_) => FfiPredictError::InvalidResponse { message },
            PredictError::InvalidImage(_)
            | PredictError::IoError(_)
            | PredictError::DecodeError(_) => FfiPredictError::InvalidImage { message },
            PredictError::BuilderError(_) | PredictError::ConfigError(_) => {
                FfiPredictError::ConfigError { message }
            }
        }
    }
}

/// Configuration for a prediction call
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiPredictConfig {
    /// Optional endpoint (uses the default local server if not specified)
    pub endpoint: Option<String>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
    /// Optional label language (Indonesian if not specified)
    pub language: Option<FfiLanguage>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiPredictError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiPredictError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Render a prediction response body as HTML
///
/// # Arguments
/// * `body` - JSON body returned by the prediction API
/// * `language` - Optional label language
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn render_prediction_json(
    body: String,
    language: Option<FfiLanguage>,
) -> Result<String, FfiPredictError> {
    let result = PredictionResult::from_json(&body)?;
    let formatter = ResultFormatter::new(language.map(Into::into).unwrap_or_default());
    Ok(formatter.assemble_display(&result).into_string())
}

/// Render an already-parsed prediction as HTML
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn render_prediction(prediction: FfiPrediction, language: Option<FfiLanguage>) -> String {
    let formatter = ResultFormatter::new(language.map(Into::into).unwrap_or_default());
    formatter
        .assemble_display(&prediction.into())
        .into_string()
}

/// Upload an image file and return the prediction
///
/// # Arguments
/// * `image_path` - Path to the image file
/// * `config` - Optional configuration for the call
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn predict_image(
    image_path: String,
    config: Option<FfiPredictConfig>,
) -> Result<FfiPrediction, FfiPredictError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let builder = crate::Predictor::builder().image(image_path);
        predict_async(builder, config).await
    })
}

/// Upload base64-encoded image data and return the prediction
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn predict_image_base64(
    data: String,
    config: Option<FfiPredictConfig>,
) -> Result<FfiPrediction, FfiPredictError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let builder = crate::Predictor::builder().image_base64(data);
        predict_async(builder, config).await
    })
}

async fn predict_async(
    mut builder: crate::PredictorBuilder,
    config: Option<FfiPredictConfig>,
) -> Result<FfiPrediction, FfiPredictError> {
    let config = config.unwrap_or_default();

    if let Some(endpoint) = config.endpoint {
        builder = builder.endpoint(endpoint);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    if let Some(language) = config.language {
        builder = builder.language(language.into());
    }

    Ok(builder.predict().await?.into())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
