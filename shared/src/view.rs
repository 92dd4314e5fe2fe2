use crate::response::Outcome;
use crate::state::UiState;

pub const PREDICTIONS_HEADING: &str = "Model Predictions:";

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Predictions {
        heading: &'static str,
        items: Vec<String>,
    },
    Paragraph(String),
    Empty,
}

impl From<&Outcome> for ResultsView {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Predictions(predictions) => ResultsView::Predictions {
                heading: PREDICTIONS_HEADING,
                items: predictions.iter().map(ToString::to_string).collect(),
            },
            Outcome::Text(text) => ResultsView::Paragraph(text.clone()),
            Outcome::Empty => ResultsView::Empty,
        }
    }
}

/// Visibility and content of every element the upload page owns.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub loading_visible: bool,
    pub submit_disabled: bool,
    pub results_visible: bool,
    pub error: Option<String>,
    pub preview_src: Option<String>,
    pub results: ResultsView,
}

pub fn render(state: &UiState) -> View {
    let pending = state.is_pending();
    let outcome = if pending || state.error().is_some() {
        None
    } else {
        state.outcome()
    };

    View {
        loading_visible: pending,
        submit_disabled: pending,
        results_visible: outcome.is_some(),
        error: state.error().map(str::to_string),
        preview_src: state.preview_src().map(str::to_string),
        results: outcome.map(ResultsView::from).unwrap_or(ResultsView::Empty),
    }
}
