pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod state;
pub mod view;

pub use config::{ClientConfig, ModelOption};
pub use error::{ConfigError, UploadError};
pub use request::{UploadRequest, IMAGE_FIELD, MODEL_FIELD};
pub use response::{ApiResponse, Outcome, Prediction};
pub use state::{Generation, Phase, UiState};
pub use view::{render, ResultsView, View};
