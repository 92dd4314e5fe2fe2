use crate::error::UploadError;

/// Multipart part carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";
/// Multipart part carrying the model identifier.
pub const MODEL_FIELD: &str = "model";

/// A submission that passed the presence checks.
///
/// Generic over the file handle so the browser can use `gloo_file::File`
/// while tests use plain byte buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest<F> {
    pub file: F,
    pub model_id: String,
}

impl<F> UploadRequest<F> {
    pub fn validate(file: Option<F>, model_id: &str) -> Result<Self, UploadError> {
        match file {
            Some(file) if !model_id.is_empty() => Ok(Self {
                file,
                model_id: model_id.to_string(),
            }),
            _ => Err(UploadError::Validation),
        }
    }
}
