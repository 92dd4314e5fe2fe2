use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{ApiResponse, IMAGE_FIELD, MODEL_FIELD, UploadError, UploadRequest};
use wasm_bindgen::JsValue;
use web_sys::FormData;

fn js_error(context: &str, err: JsValue) -> UploadError {
    UploadError::Other(format!("{}: {:?}", context, err))
}

fn build_form_data(request: &UploadRequest<GlooFile>) -> Result<FormData, UploadError> {
    let form_data = FormData::new().map_err(|e| js_error("Failed to create form data", e))?;
    form_data
        .append_with_blob_and_filename(IMAGE_FIELD, request.file.as_ref(), &request.file.name())
        .map_err(|e| js_error("Failed to attach image", e))?;
    form_data
        .append_with_str(MODEL_FIELD, &request.model_id)
        .map_err(|e| js_error("Failed to attach model", e))?;
    Ok(form_data)
}

/// Posts the image and model id as multipart form data and decodes the reply.
pub async fn post_upload(
    endpoint: &str,
    request: &UploadRequest<GlooFile>,
) -> Result<ApiResponse, UploadError> {
    let form_data = build_form_data(request)?;

    let response = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| UploadError::Other(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    let status = response.status();
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        log::warn!("Server error: {} - {}", status, body);
        return Err(UploadError::Http { status });
    }

    let body = response
        .text()
        .await
        .map_err(|e| UploadError::Parse(e.to_string()))?;
    ApiResponse::from_http(status, &body)
}

pub async fn read_preview(file: &GlooFile) -> Result<String, UploadError> {
    gloo_file::futures::read_as_data_url(file)
        .await
        .map_err(|e| UploadError::Other(format!("Failed to read {}: {}", file.name(), e)))
}
