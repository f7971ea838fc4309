use serde::{Deserialize, Serialize};

use crate::PredictError;

/// Sentinel sent by the API when a dish has no ingredient or calorie data
pub const DATA_UNAVAILABLE: &str = "Data tidak tersedia";

/// Sentinel sent by the API when a dish has no recipe yet
pub const RECIPE_UNAVAILABLE: &str = "Resep belum ditambahkan.";

/// Outcome reported by the prediction API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    /// Anything the API reports that is not an explicit success
    #[default]
    Failure,
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        if value == "success" {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// A validated prediction, ready to be rendered
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionResult {
    pub status: Status,
    pub predicted_name: String,
    /// Fraction in `[0, 1]`
    pub confidence: f64,
    pub calories_per_serving: Option<String>,
    pub main_ingredients: Option<String>,
    pub recipe_steps: Option<String>,
    pub error: Option<String>,
}

impl PredictionResult {
    /// Build a failed prediction carrying the upstream message
    pub fn failure(message: impl Into<String>) -> Self {
        PredictionResult {
            status: Status::Failure,
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Parse and validate a JSON response body
    pub fn from_json(body: &str) -> Result<Self, PredictError> {
        let raw: RawPrediction = serde_json::from_str(body)?;
        Self::try_from(raw)
    }
}

/// Confidence as it appears on the wire: the server formats it as a string,
/// other deployments send a plain number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ConfidenceValue {
    Number(f64),
    Text(String),
}

impl ConfidenceValue {
    fn parse(&self) -> Result<f64, PredictError> {
        let value = match self {
            ConfidenceValue::Number(n) => *n,
            ConfidenceValue::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                PredictError::InvalidResponse(format!("confidence is not a number: {:?}", s))
            })?,
        };

        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(PredictError::InvalidResponse(format!(
                "confidence out of range: {}",
                value
            )));
        }

        Ok(value)
    }
}

/// Response body exactly as the prediction API sends it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPrediction {
    #[serde(default)]
    status: Option<String>,
    #[serde(default, rename = "prediksi_nama", alias = "predicted_name")]
    predicted_name: Option<String>,
    #[serde(default, rename = "akurasi_prediksi", alias = "confidence")]
    confidence: Option<ConfidenceValue>,
    #[serde(default, rename = "kalori_per_sajian", alias = "calories")]
    calories: Option<String>,
    #[serde(default, rename = "bahan_utama", alias = "main_ingredients")]
    main_ingredients: Option<String>,
    #[serde(default, rename = "cara_membuat", alias = "instructions")]
    instructions: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawPrediction> for PredictionResult {
    type Error = PredictError;

    fn try_from(raw: RawPrediction) -> Result<Self, Self::Error> {
        let status = raw.status.as_deref().map(Status::from).unwrap_or_default();

        if status == Status::Failure {
            return Ok(PredictionResult {
                status,
                error: raw.error,
                ..Default::default()
            });
        }

        let predicted_name = raw
            .predicted_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| PredictError::InvalidResponse("missing predicted name".to_string()))?;

        let confidence = raw
            .confidence
            .ok_or_else(|| PredictError::InvalidResponse("missing confidence".to_string()))?
            .parse()?;

        Ok(PredictionResult {
            status,
            predicted_name,
            confidence,
            calories_per_serving: raw.calories,
            main_ingredients: raw.main_ingredients,
            recipe_steps: raw.instructions,
            error: None,
        })
    }
}
