use serde::Deserialize;

/// Language of the display labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Bahasa Indonesia, as served by the prediction API
    #[default]
    #[serde(alias = "id")]
    Indonesian,
    #[serde(alias = "en")]
    English,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "indonesian" => Ok(Language::Indonesian),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}

/// Fixed text around the values in a rendered prediction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub prediction: &'static str,
    pub confidence: &'static str,
    pub calorie_section: &'static str,
    pub calories_per_serving: &'static str,
    pub ingredients_section: &'static str,
    pub recipe_section: &'static str,
    pub prediction_failed: &'static str,
    pub unknown_error: &'static str,
    pub api_unreachable: &'static str,
    pub api_unreachable_hint: &'static str,
}

impl Labels {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Indonesian => Labels {
                prediction: "🍽️ Prediksi",
                confidence: "Tingkat Keyakinan Model",
                calorie_section: "🔥 Informasi Kalori",
                calories_per_serving: "Kalori per Sajian",
                ingredients_section: "🥦 Bahan Utama",
                recipe_section: "📝 Cara Membuat",
                prediction_failed: "Prediksi gagal",
                unknown_error: "kesalahan tidak diketahui",
                api_unreachable: "ERROR: Gagal menghubungi API",
                api_unreachable_hint: "Pastikan server prediksi berjalan.",
            },
            Language::English => Labels {
                prediction: "🍽️ Prediction",
                confidence: "Model Confidence",
                calorie_section: "🔥 Calorie Information",
                calories_per_serving: "Calories per Serving",
                ingredients_section: "🥦 Main Ingredients",
                recipe_section: "📝 How to Make It",
                prediction_failed: "Prediction failed",
                unknown_error: "unknown error",
                api_unreachable: "ERROR: Could not reach the API",
                api_unreachable_hint: "Make sure the prediction server is running.",
            },
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels::for_language(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("id".parse::<Language>().unwrap(), Language::Indonesian);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_labels_are_indonesian() {
        assert_eq!(Labels::default().prediction_failed, "Prediksi gagal");
    }
}
