use super::super::{Model, Msg};
use super::utils::first_file;
use shared::View;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn render_upload_form(model: &Model, ctx: &Context<Model>, view: &View) -> Html {
    let link = ctx.link();

    let handle_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    let handle_file_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChosen(first_file(input.files()))
    });

    let handle_model_change = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::ModelChosen(select.value())
    });

    html! {
        <form id="uploadForm" class="upload-section" onsubmit={handle_submit}>
            <label for="imageUpload">{"Image"}</label>
            <input
                type="file"
                id="imageUpload"
                accept="image/*"
                onchange={handle_file_change}
            />

            <label for="modelSelect">{"Model"}</label>
            <select id="modelSelect" onchange={handle_model_change}>
                <option value="" disabled=true selected={model.model_id.is_empty()}>
                    {"Select a model"}
                </option>
                { for model.config.models.iter().map(|option| html! {
                    <option value={option.id.clone()} selected={option.id == model.model_id}>
                        { option.label.clone() }
                    </option>
                })}
            </select>

            <button
                type="submit"
                id="submitBtn"
                class="analyze-btn"
                disabled={view.submit_disabled}
            >
                <i class="fa-solid fa-magnifying-glass"></i>{" Analyze"}
            </button>
        </form>
    }
}
