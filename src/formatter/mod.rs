//! Turns prediction results into escaped HTML fragments.

mod document;
mod fragment;
mod labels;
mod lists;

use html_escape::encode_text_to_string;

use crate::model::{PredictionResult, DATA_UNAVAILABLE};
use crate::PredictError;

pub use self::document::render_document;
pub use self::fragment::Fragment;
pub use self::labels::{Labels, Language};
pub use self::lists::{format_ingredients, format_recipe_steps};

const SECTION_SEPARATOR: &str = "<hr style=\"border-color: #50589C; margin: 15px 0;\">";

/// Stateless renderer for prediction results
#[derive(Debug, Clone, Default)]
pub struct ResultFormatter {
    labels: Labels,
}

impl ResultFormatter {
    pub fn new(language: Language) -> Self {
        ResultFormatter {
            labels: Labels::for_language(language),
        }
    }

    pub fn with_labels(labels: Labels) -> Self {
        ResultFormatter { labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn format_ingredients(&self, text: Option<&str>) -> Fragment {
        format_ingredients(text)
    }

    pub fn format_recipe_steps(&self, text: Option<&str>) -> Fragment {
        format_recipe_steps(text)
    }

    /// Render the whole prediction.
    ///
    /// Successful results get the full layout: name, confidence, calories,
    /// ingredients, recipe. Anything else renders only the error message.
    pub fn assemble_display(&self, result: &PredictionResult) -> Fragment {
        if !result.is_success() {
            let message = result
                .error
                .as_deref()
                .filter(|e| !e.trim().is_empty())
                .unwrap_or(self.labels.unknown_error);
            return self.failure(message);
        }

        let labels = &self.labels;
        let calories = result
            .calories_per_serving
            .as_deref()
            .map(normalize_dashes)
            .unwrap_or_else(|| DATA_UNAVAILABLE.to_string());

        let mut out = String::from("<div class=\"result-item\">");

        out.push_str("<h4>");
        out.push_str(labels.prediction);
        out.push_str(": ");
        encode_text_to_string(&result.predicted_name, &mut out);
        out.push_str("</h4>");

        out.push_str("<p><strong>");
        out.push_str(labels.confidence);
        out.push_str(":</strong> ");
        out.push_str(&confidence_percent(result.confidence));
        out.push_str("%</p>");

        out.push_str(SECTION_SEPARATOR);

        out.push_str("<h4>");
        out.push_str(labels.calorie_section);
        out.push_str("</h4><p><strong>");
        out.push_str(labels.calories_per_serving);
        out.push_str(":</strong> ");
        encode_text_to_string(&calories, &mut out);
        out.push_str("</p>");

        out.push_str("<h4>");
        out.push_str(labels.ingredients_section);
        out.push_str("</h4>");
        out.push_str(format_ingredients(result.main_ingredients.as_deref()).as_str());

        out.push_str("<h4>");
        out.push_str(labels.recipe_section);
        out.push_str("</h4>");
        out.push_str(format_recipe_steps(result.recipe_steps.as_deref()).as_str());

        out.push_str("</div>");
        Fragment::from_markup(out)
    }

    /// Render an error raised before a prediction could be read.
    ///
    /// API errors that carry a server message read like a failed prediction;
    /// everything else is reported as the API being unreachable.
    pub fn format_error(&self, err: &PredictError) -> Fragment {
        match err {
            PredictError::ApiError { message, .. } if !message.trim().is_empty() => {
                self.failure(message)
            }
            other => {
                let text = format!(
                    "{} ({}). {}",
                    self.labels.api_unreachable, other, self.labels.api_unreachable_hint
                );
                Fragment::paragraph(Some("error-message"), &text)
            }
        }
    }

    fn failure(&self, message: &str) -> Fragment {
        let text = format!("{}: {}", self.labels.prediction_failed, message);
        Fragment::paragraph(Some("error-message"), &text)
    }
}

/// `0.8734` -> `"87.34"`, ties rounded away from zero
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.2}", (confidence * 10000.0).round() / 100.0)
}

/// Replace HTML-encoded en-dashes with the literal character
pub fn normalize_dashes(text: &str) -> String {
    text.replace("&ndash;", "–")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn sample() -> PredictionResult {
        PredictionResult {
            status: Status::Success,
            predicted_name: "Nasi Goreng".to_string(),
            confidence: 0.8734,
            calories_per_serving: Some("250&ndash;300 kkal".to_string()),
            main_ingredients: Some("Nasi, Telur".to_string()),
            recipe_steps: Some("1. Tumis\n2. Sajikan".to_string()),
            error: None,
        }
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(confidence_percent(0.8734), "87.34");
        assert_eq!(confidence_percent(1.0), "100.00");
        assert_eq!(confidence_percent(0.0), "0.00");
    }

    #[test]
    fn test_confidence_percent_rounds_ties_up() {
        assert_eq!(confidence_percent(0.00125), "0.13");
        assert_eq!(confidence_percent(0.00625), "0.63");
        assert_eq!(confidence_percent(0.5), "50.00");
    }

    #[test]
    fn test_normalize_dashes() {
        assert_eq!(normalize_dashes("250&ndash;300"), "250–300");
        assert_eq!(normalize_dashes("a&ndash;b&ndash;c"), "a–b–c");
        assert_eq!(normalize_dashes("300 kkal"), "300 kkal");
    }

    #[test]
    fn test_success_layout_order() {
        let html = ResultFormatter::default().assemble_display(&sample()).into_string();

        let positions: Vec<usize> = [
            "Prediksi: Nasi Goreng",
            "87.34%",
            "Informasi Kalori",
            "250–300 kkal",
            "ingredients-list",
            "recipe-list",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.starts_with("<div class=\"result-item\">"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_failure_layout() {
        let result = PredictionResult::failure("model unavailable");
        let html = ResultFormatter::default().assemble_display(&result).into_string();

        assert_eq!(
            html,
            "<p class=\"error-message\">Prediksi gagal: model unavailable</p>"
        );
    }

    #[test]
    fn test_failure_without_message() {
        let result = PredictionResult::default();
        let html = ResultFormatter::new(Language::English)
            .assemble_display(&result)
            .into_string();
        assert_eq!(
            html,
            "<p class=\"error-message\">Prediction failed: unknown error</p>"
        );
    }

    #[test]
    fn test_name_is_escaped() {
        let mut result = sample();
        result.predicted_name = "<script>alert(1)</script>".to_string();
        let html = ResultFormatter::default().assemble_display(&result).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_format_error_api_message() {
        let err = PredictError::ApiError {
            status: 400,
            message: "Tidak ada file yang dipilih.".to_string(),
        };
        assert_eq!(
            ResultFormatter::default().format_error(&err).as_str(),
            "<p class=\"error-message\">Prediksi gagal: Tidak ada file yang dipilih.</p>"
        );
    }

    #[test]
    fn test_format_error_transport() {
        let err = PredictError::InvalidResponse("expected value".to_string());
        let html = ResultFormatter::default().format_error(&err).into_string();
        assert!(html.starts_with("<p class=\"error-message\">ERROR: Gagal menghubungi API ("));
        assert!(html.contains("expected value"));
    }
}
