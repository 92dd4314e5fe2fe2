use shared::{ApiResponse, Phase, ResultsView, UiState, UploadError, UploadRequest, View, render};

/// Counts what the page would do on a submission against a canned endpoint.
struct Harness {
    state: UiState,
    requests: usize,
    restorations: usize,
}

impl Harness {
    fn new() -> Self {
        Self {
            state: UiState::new(),
            requests: 0,
            restorations: 0,
        }
    }

    fn submit(&mut self, file: Option<&[u8]>, model: &str, status: u16, body: &str) -> View {
        match UploadRequest::validate(file, model) {
            Err(err) => self.state.reject(&err),
            Ok(request) => {
                let generation = self.state.begin();
                assert!(render(&self.state).loading_visible);
                assert!(render(&self.state).submit_disabled);

                self.requests += 1;
                self.state.show_preview(generation, format!("data:;len={}", request.file.len()));
                if self.state.settle(generation, ApiResponse::from_http(status, body)) {
                    self.restorations += 1;
                }
            }
        }
        render(&self.state)
    }
}

#[test]
fn missing_file_and_model_never_reaches_the_network() {
    let mut harness = Harness::new();
    let view = harness.submit(None, "", 200, "{}");

    assert_eq!(harness.requests, 0);
    assert!(!view.loading_visible);
    assert_eq!(view.error.as_deref(), Some("Please select both an image and a model"));
}

#[test]
fn single_prediction_is_rendered_as_percentage() {
    let mut harness = Harness::new();
    let view = harness.submit(
        Some(b"\x89PNG"),
        "resnet50",
        200,
        r#"{ "predictions": [{ "label": "cat", "score": 0.9234 }] }"#,
    );

    assert!(view.results_visible);
    match view.results {
        ResultsView::Predictions { items, .. } => assert_eq!(items, vec!["cat: 92.34%"]),
        other => panic!("expected predictions, got {:?}", other),
    }
}

#[test]
fn textual_result_is_a_single_paragraph() {
    let mut harness = Harness::new();
    let view = harness.submit(Some(b"jpeg"), "yolo", 200, r#"{ "result": "Detected: dog" }"#);

    assert_eq!(view.results, ResultsView::Paragraph("Detected: dog".into()));
}

#[test]
fn server_error_shows_status_and_hides_results() {
    let mut harness = Harness::new();
    let view = harness.submit(Some(b"jpeg"), "yolo", 500, "Internal Server Error");

    assert!(!view.results_visible);
    assert!(view.error.as_deref().unwrap_or_default().contains("500"));
    assert_eq!(harness.state.phase(), Phase::Failed);
}

#[test]
fn predictions_win_when_both_fields_are_present() {
    let mut harness = Harness::new();
    let view = harness.submit(
        Some(b"jpeg"),
        "resnet50",
        200,
        r#"{ "predictions": [{ "label": "cat", "score": 0.5 }], "result": "Detected: dog" }"#,
    );

    assert!(matches!(view.results, ResultsView::Predictions { .. }));
}

#[test]
fn pending_state_is_restored_once_per_submission() {
    let mut harness = Harness::new();
    let outcomes = [
        (200, r#"{ "result": "ok" }"#),
        (503, ""),
        (200, "not json"),
    ];

    for (i, (status, body)) in outcomes.iter().enumerate() {
        let view = harness.submit(Some(b"jpeg"), "resnet50", *status, body);
        assert!(!view.loading_visible);
        assert!(!view.submit_disabled);
        assert_eq!(harness.restorations, i + 1);
    }

    assert!(matches!(
        ApiResponse::from_http(200, "not json"),
        Err(UploadError::Parse(_))
    ));
}

#[test]
fn overlapping_submissions_only_show_the_latest() {
    let mut state = UiState::new();
    let first = state.begin();
    let second = state.begin();

    assert!(state.settle(second, ApiResponse::from_http(200, r#"{ "result": "second" }"#)));
    assert!(!state.settle(first, ApiResponse::from_http(200, r#"{ "result": "first" }"#)));

    let view = render(&state);
    assert_eq!(view.results, ResultsView::Paragraph("second".into()));
    assert!(!view.loading_visible);
}
