use gloo_file::File as GlooFile;
use shared::View;
use web_sys::FileList;
use yew::prelude::*;

pub fn first_file(files: Option<FileList>) -> Option<GlooFile> {
    files.and_then(|list| list.item(0)).map(GlooFile::from)
}

pub fn hidden_unless(visible: bool) -> Option<&'static str> {
    (!visible).then_some("hidden")
}

pub fn render_error_message(view: &View) -> Html {
    html! {
        <div id="error" class={classes!("error-message", hidden_unless(view.error.is_some()))}>
            <i class="fa-solid fa-circle-exclamation"></i>
            <p>{ view.error.clone().unwrap_or_default() }</p>
        </div>
    }
}
