mod http;

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

use crate::model::PredictionResult;
use crate::PredictError;

pub use self::http::HttpBackend;

/// Where the image to classify comes from
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image from a file path
    Path(String),
    /// Image as base64-encoded data
    Base64(String),
}

/// An image loaded into memory, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, PredictError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(PredictError::InvalidImage("no file selected".to_string()));
        }
        if bytes.is_empty() {
            return Err(PredictError::InvalidImage(format!("{} is empty", file_name)));
        }
        Ok(ImageUpload { file_name, bytes })
    }

    /// Load the image bytes for the given source
    pub async fn load(source: &ImageSource) -> Result<Self, PredictError> {
        match source {
            ImageSource::Path(path) => {
                let bytes = tokio::fs::read(path).await?;
                let file_name = Path::new(path)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("image")
                    .to_string();
                debug!("Loaded {} ({} bytes)", file_name, bytes.len());
                Self::new(file_name, bytes)
            }
            ImageSource::Base64(data) => {
                let bytes = STANDARD.decode(data.trim())?;
                let file_name = format!("upload.{}", sniff_extension(&bytes));
                debug!("Decoded base64 image ({} bytes)", bytes.len());
                Self::new(file_name, bytes)
            }
        }
    }

    /// MIME type derived from the file extension
    pub fn mime_type(&self) -> &'static str {
        let extension = Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            _ => "application/octet-stream",
        }
    }
}

/// Guess an extension for anonymous image data from its magic bytes
fn sniff_extension(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "jpg"
    } else if bytes.starts_with(b"\x89PNG") {
        "png"
    } else {
        "bin"
    }
}

/// Something that can classify an image
#[async_trait::async_trait]
pub trait PredictionBackend: Send + Sync {
    async fn predict(&self, image: &ImageUpload) -> Result<PredictionResult, PredictError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_from_extension() {
        let upload = |name: &str| ImageUpload::new(name, vec![1]).unwrap();
        assert_eq!(upload("dish.JPG").mime_type(), "image/jpeg");
        assert_eq!(upload("dish.jpeg").mime_type(), "image/jpeg");
        assert_eq!(upload("dish.png").mime_type(), "image/png");
        assert_eq!(upload("dish.gif").mime_type(), "application/octet-stream");
        assert_eq!(upload("dish").mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_empty_upload_rejected() {
        assert!(matches!(
            ImageUpload::new("dish.jpg", Vec::new()),
            Err(PredictError::InvalidImage(_))
        ));
        assert!(matches!(
            ImageUpload::new("", vec![1, 2]),
            Err(PredictError::InvalidImage(_))
        ));
    }

    #[tokio::test]
    async fn test_load_base64_png() {
        let data = STANDARD.encode(b"\x89PNG\r\n\x1a\nrest");
        let upload = ImageUpload::load(&ImageSource::Base64(data)).await.unwrap();
        assert_eq!(upload.file_name, "upload.png");
        assert_eq!(upload.mime_type(), "image/png");
    }

    #[tokio::test]
    async fn test_load_invalid_base64() {
        let result = ImageUpload::load(&ImageSource::Base64("not base64!".to_string())).await;
        assert!(matches!(result, Err(PredictError::DecodeError(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result =
            ImageUpload::load(&ImageSource::Path("/nonexistent/dish.jpg".to_string())).await;
        assert!(matches!(result, Err(PredictError::IoError(_))));
    }
}
