use super::super::{Model, Msg};
use crate::api;
use gloo_file::File as GlooFile;
use shared::{ApiResponse, Generation, UploadError, UploadRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, file: Option<GlooFile>) -> bool {
    if let Some(file) = &file {
        log::debug!("Selected {} ({} bytes)", file.name(), file.size());
    }
    model.file = file;
    false
}

pub fn handle_model_chosen(model: &mut Model, model_id: String) -> bool {
    model.model_id = model_id;
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    let request = match UploadRequest::validate(model.file.clone(), &model.model_id) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("{}", err);
            model.state.reject(&err);
            return true;
        }
    };

    let generation = model.state.begin();
    load_preview(ctx, generation, request.file.clone());
    send_upload_request(ctx, generation, model.config.endpoint.clone(), request);
    true
}

pub fn handle_preview_loaded(model: &mut Model, generation: Generation, url: String) -> bool {
    model.state.show_preview(generation, url)
}

pub fn handle_settled(
    model: &mut Model,
    generation: Generation,
    result: Result<ApiResponse, UploadError>,
) -> bool {
    model.state.settle(generation, result)
}

fn load_preview(ctx: &Context<Model>, generation: Generation, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            match api::read_preview(&file).await {
                Ok(url) => link.send_message(Msg::PreviewLoaded(generation, url)),
                Err(e) => log::warn!("{}", e),
            }
        }
    });
}

fn send_upload_request(
    ctx: &Context<Model>,
    generation: Generation,
    endpoint: String,
    request: UploadRequest<GlooFile>,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let result = api::post_upload(&endpoint, &request).await;
            link.send_message(Msg::Settled(generation, result));
        }
    });
}
