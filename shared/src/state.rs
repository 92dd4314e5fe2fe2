use crate::error::UploadError;
use crate::response::{ApiResponse, Outcome};
use strum::{AsRefStr, Display};

/// Token handed out per submission. Only the most recent one may touch the UI.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    derive_more::Display,
)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Idle,
    Pending,
    Success,
    Failed,
}

/// Transient state behind the upload form. Reset piecewise on every submit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UiState {
    latest: Generation,
    pending: Option<Generation>,
    preview_src: Option<String>,
    outcome: Option<Outcome>,
    error: Option<String>,
    server_image: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission refused before any request was made. An in-flight request is left alone.
    pub fn reject(&mut self, err: &UploadError) {
        self.outcome = None;
        self.error = Some(err.user_message());
    }

    /// Enters the pending state for a new request and returns its generation.
    pub fn begin(&mut self) -> Generation {
        self.latest = self.latest.next();
        self.pending = Some(self.latest);
        self.outcome = None;
        self.error = None;
        self.server_image = false;
        log::info!("Submitting upload, generation {}", self.latest);
        self.latest
    }

    pub fn show_preview(&mut self, generation: Generation, src: String) -> bool {
        if generation != self.latest {
            log::debug!(
                "Dropping preview for generation {}, latest is {}",
                generation,
                self.latest
            );
            return false;
        }
        // the endpoint's imageUrl outranks a local read that finishes late
        if self.server_image {
            log::debug!("Keeping server image for generation {}", generation);
            return false;
        }
        self.preview_src = Some(src);
        true
    }

    /// Applies the result of a request and leaves the pending state.
    ///
    /// Returns `false` without touching anything when `generation` is stale or
    /// was already settled, so the pending state is restored once per submission.
    pub fn settle(
        &mut self,
        generation: Generation,
        result: Result<ApiResponse, UploadError>,
    ) -> bool {
        if self.pending != Some(generation) {
            log::debug!(
                "Discarding response for generation {}, pending is {:?}",
                generation,
                self.pending
            );
            return false;
        }
        self.pending = None;

        match result {
            Ok(response) => {
                if let Some(url) = response.image_url {
                    self.preview_src = Some(url);
                    self.server_image = true;
                }
                self.outcome = Some(response.outcome);
                self.error = None;
            }
            Err(err) => {
                log::error!("Error: {}", err);
                self.outcome = None;
                self.error = Some(err.user_message());
            }
        }
        true
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::Pending
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.outcome.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn latest(&self) -> Generation {
        self.latest
    }

    pub fn preview_src(&self) -> Option<&str> {
        self.preview_src.as_deref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
