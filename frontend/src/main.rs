mod api;
mod components;
mod config;

use components::handlers;
use components::header::render_header;
use components::results::{render_loading, render_results};
use components::upload_form::render_upload_form;
use components::utils::render_error_message;
use gloo_file::File as GlooFile;
use shared::{ApiResponse, ClientConfig, Generation, UiState, UploadError, render};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Form inputs
    FileChosen(Option<GlooFile>),
    ModelChosen(String),
    Submit,

    // Async completions
    PreviewLoaded(Generation, String),
    Settled(Generation, Result<ApiResponse, UploadError>),
}

// Main component
struct Model {
    config: ClientConfig,
    file: Option<GlooFile>,
    model_id: String,
    state: UiState,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: config::load_config(),
            file: None,
            model_id: String::new(),
            state: UiState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::ModelChosen(model_id) => handlers::handle_model_chosen(self, model_id),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::PreviewLoaded(generation, url) => {
                handlers::handle_preview_loaded(self, generation, url)
            }
            Msg::Settled(generation, result) => handlers::handle_settled(self, generation, result),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = render(&self.state);

        html! {
            <div class={classes!("container", self.state.phase().to_string())}>
                { render_header() }

                <main class="main-content">
                    { render_upload_form(self, ctx, &view) }
                    { render_loading(&view) }
                    { render_error_message(&view) }
                    { render_results(&view) }
                </main>

                <footer class="app-footer">
                    <p>{"Image Classification Demo | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
