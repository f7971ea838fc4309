pub mod backend;
pub mod builder;
pub mod config;
pub mod error;
pub mod formatter;
pub mod model;

// UniFFI bindings module (only compiled when uniffi feature is enabled)
#[cfg(feature = "uniffi")]
pub mod uniffi_bindings;

// Re-export UniFFI scaffolding when feature is enabled
#[cfg(feature = "uniffi")]
pub use uniffi_bindings::*;

pub use backend::{HttpBackend, ImageSource, ImageUpload, PredictionBackend};
pub use builder::{OutputMode, PredictOutput, Predictor, PredictorBuilder};
pub use config::ClientConfig;
pub use error::PredictError;
pub use formatter::{render_document, Fragment, Labels, Language, ResultFormatter};
pub use model::{PredictionResult, Status, DATA_UNAVAILABLE, RECIPE_UNAVAILABLE};

/// Render a prediction response body with the default (Indonesian) labels.
///
/// # Example
/// ```
/// let html = letthemcook::render_prediction_json(
///     r#"{"status": "failure", "error": "model unavailable"}"#,
/// )
/// .unwrap();
/// assert!(html.as_str().contains("model unavailable"));
/// ```
pub fn render_prediction_json(body: &str) -> Result<Fragment, PredictError> {
    let result = PredictionResult::from_json(body)?;
    Ok(ResultFormatter::default().assemble_display(&result))
}

/// Upload an image to the configured endpoint and render the result.
///
/// Configuration comes from `config.toml` and `LETTHEMCOOK__*` variables.
pub async fn predict_image(path: &str) -> Result<Fragment, PredictError> {
    let config = ClientConfig::load()?;
    let output = PredictorBuilder::from_config(&config)
        .image(path)
        .build()
        .await?;

    match output {
        PredictOutput::Html(fragment) => Ok(fragment),
        PredictOutput::Prediction(_) => Err(PredictError::BuilderError(
            "Unexpected prediction result when rendering".to_string(),
        )),
    }
}
