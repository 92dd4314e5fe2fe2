use super::utils::hidden_unless;
use shared::{ResultsView, View};
use yew::prelude::*;

pub fn render_loading(view: &View) -> Html {
    html! {
        <div id="loading" class={classes!("loading-preview", hidden_unless(view.loading_visible))}>
            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            <p>{"Analyzing..."}</p>
        </div>
    }
}

pub fn render_results(view: &View) -> Html {
    html! {
        <div id="results" class={classes!("results-container", hidden_unless(view.results_visible))}>
            {
                match &view.preview_src {
                    Some(src) => html! {
                        <img id="previewImage" src={src.clone()} alt="Image Preview" />
                    },
                    None => html! {
                        <div class="unavailable-preview">
                            <p>{"Preview unavailable"}</p>
                        </div>
                    },
                }
            }
            <div id="modelResults">{ render_results_content(&view.results) }</div>
        </div>
    }
}

fn render_results_content(results: &ResultsView) -> Html {
    match results {
        ResultsView::Predictions { heading, items } => html! {
            <>
                <h3>{ *heading }</h3>
                <ul>
                    { for items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
                </ul>
            </>
        },
        ResultsView::Paragraph(text) => html! { <p>{ text.clone() }</p> },
        ResultsView::Empty => html! {},
    }
}
