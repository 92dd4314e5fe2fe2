use crate::error::UploadError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}%", self.label, self.score * 100.0)
    }
}

/// Body as the inference endpoint sends it. Every field is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    predictions: Option<Vec<Prediction>>,
    #[serde(default)]
    result: Option<String>,
}

/// What the endpoint told us to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Predictions(Vec<Prediction>),
    Text(String),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub image_url: Option<String>,
    pub outcome: Outcome,
}

impl ApiResponse {
    pub fn from_json(body: &str) -> Result<Self, UploadError> {
        let wire: WireResponse = serde_json::from_str(body)?;
        Ok(Self::from_wire(wire))
    }

    /// Decodes a finished HTTP exchange. Anything outside 2xx is an error
    /// regardless of the body.
    pub fn from_http(status: u16, body: &str) -> Result<Self, UploadError> {
        if !(200..300).contains(&status) {
            return Err(UploadError::Http { status });
        }
        Self::from_json(body)
    }

    fn from_wire(wire: WireResponse) -> Self {
        // predictions win over result, even when the list is empty
        let outcome = match (wire.predictions, wire.result) {
            (Some(predictions), _) => Outcome::Predictions(predictions),
            (None, Some(text)) if !text.is_empty() => Outcome::Text(text),
            _ => Outcome::Empty,
        };

        ApiResponse {
            image_url: wire.image_url.filter(|url| !url.is_empty()),
            outcome,
        }
    }
}
