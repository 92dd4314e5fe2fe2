use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-images"></i> {" Image Upload & Prediction"}</h1>
            <p class="subtitle">{"Pick an image and a model, then analyze"}</p>
        </header>
    }
}
