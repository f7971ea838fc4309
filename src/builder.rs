use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::backend::{HttpBackend, ImageSource, ImageUpload, PredictionBackend};
use crate::config::ClientConfig;
use crate::formatter::{Fragment, Language, ResultFormatter};
use crate::model::PredictionResult;
use crate::PredictError;

/// Represents the desired output format
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Render the prediction as HTML (default)
    #[default]
    Html,
    /// Return the validated prediction without rendering
    Prediction,
}

/// Result of a prediction run
#[derive(Debug, Clone)]
pub enum PredictOutput {
    /// Rendered display fragment
    Html(Fragment),
    /// Validated prediction record
    Prediction(PredictionResult),
}

/// Builder for configuring and executing an image prediction
#[derive(Default)]
pub struct PredictorBuilder {
    source: Option<ImageSource>,
    mode: OutputMode,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    language: Option<Language>,
    user_agent: Option<String>,
    backend: Option<Arc<dyn PredictionBackend>>,
}

impl fmt::Debug for PredictorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictorBuilder")
            .field("source", &self.source)
            .field("mode", &self.mode)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("language", &self.language)
            .field("user_agent", &self.user_agent)
            .field("custom_backend", &self.backend.is_some())
            .finish()
    }
}

impl PredictorBuilder {
    /// Start from loaded configuration instead of built-in defaults
    pub fn from_config(config: &ClientConfig) -> Self {
        PredictorBuilder::default()
            .endpoint(config.endpoint.clone())
            .timeout(config.timeout())
            .language(config.language)
            .user_agent(config.user_agent.clone())
    }

    /// Set the image to a file on disk
    ///
    /// # Example
    /// ```
    /// use letthemcook::Predictor;
    ///
    /// let builder = Predictor::builder()
    ///     .image("/path/to/dish.jpg");
    /// ```
    pub fn image(mut self, path: impl Into<String>) -> Self {
        self.source = Some(ImageSource::Path(path.into()));
        self
    }

    /// Set the image to base64-encoded data
    pub fn image_base64(mut self, data: impl Into<String>) -> Self {
        self.source = Some(ImageSource::Base64(data.into()));
        self
    }

    /// Set the prediction endpoint URL
    ///
    /// # Example
    /// ```
    /// use letthemcook::Predictor;
    ///
    /// let builder = Predictor::builder()
    ///     .image("dish.jpg")
    ///     .endpoint("http://192.168.1.20:5000/predict");
    /// ```
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set a timeout for the upload request
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the language of the rendered labels
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the User-Agent header sent with the upload
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Return the prediction record instead of rendered HTML
    pub fn prediction_only(mut self) -> Self {
        self.mode = OutputMode::Prediction;
        self
    }

    /// Use a custom backend instead of the HTTP client
    ///
    /// `endpoint`, `timeout` and `user_agent` are ignored when a backend is supplied.
    pub fn backend(mut self, backend: Arc<dyn PredictionBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Upload the image and produce the requested output
    ///
    /// A failure reported by the API is not an error here: in HTML mode it
    /// renders as an error fragment, in prediction mode it comes back as a
    /// `Status::Failure` record.
    ///
    /// # Errors
    /// Returns `PredictError` if:
    /// - No image was specified
    /// - The image cannot be read or is empty
    /// - The API cannot be reached or answers with a non-success status
    /// - The response is not a valid prediction
    ///
    /// # Example
    /// ```no_run
    /// # use letthemcook::Predictor;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let output = Predictor::builder()
    ///     .image("dish.jpg")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<PredictOutput, PredictError> {
        let mode = self.mode;
        let language = self.language.unwrap_or_default();
        let result = self.predict().await?;

        Ok(match mode {
            OutputMode::Html => {
                let formatter = ResultFormatter::new(language);
                PredictOutput::Html(formatter.assemble_display(&result))
            }
            OutputMode::Prediction => PredictOutput::Prediction(result),
        })
    }

    /// Upload the image and return the validated prediction, ignoring the
    /// output mode and language
    pub async fn predict(self) -> Result<PredictionResult, PredictError> {
        let source = self.source.ok_or_else(|| {
            PredictError::BuilderError(
                "No image specified. Use .image() or .image_base64()".to_string(),
            )
        })?;

        let backend: Arc<dyn PredictionBackend> = match self.backend {
            Some(backend) => backend,
            None => {
                let endpoint = self
                    .endpoint
                    .unwrap_or_else(|| ClientConfig::default().endpoint);
                Arc::new(HttpBackend::with_user_agent(
                    endpoint,
                    self.timeout,
                    self.user_agent,
                )?)
            }
        };

        let upload = ImageUpload::load(&source).await?;
        let result = backend.predict(&upload).await?;
        info!(
            "Prediction for {}: {:?} {}",
            upload.file_name, result.status, result.predicted_name
        );

        Ok(result)
    }
}

/// Main entry point for the builder API
pub struct Predictor;

impl Predictor {
    /// Creates a new builder for predicting a dish from an image
    ///
    /// # Example
    /// ```
    /// use letthemcook::Predictor;
    ///
    /// let builder = Predictor::builder();
    /// ```
    pub fn builder() -> PredictorBuilder {
        PredictorBuilder::default()
    }
}
