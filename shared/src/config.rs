use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://your-api-gateway-url.amazonaws.com/prod/process-image";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    #[serde(default)]
    pub models: Vec<ModelOption>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            models: Vec::new(),
        }
    }
}

impl ClientConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_yaml::from_str(source)?;
        config.validated()
    }

    /// Replaces the endpoint when `endpoint` is set and non-blank.
    pub fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.endpoint = endpoint.to_string();
        }
        self
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if let Some(model) = self.models.iter().find(|m| m.id.is_empty()) {
            return Err(ConfigError::EmptyModelId(model.label.clone()));
        }
        Ok(self)
    }
}
