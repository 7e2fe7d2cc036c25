use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use podium::async_callback;
use podium::data::Presentation;
use podium::log::warn;
use podium::serde_json::json;
use podium::session::Page;

use crate::hooks::use_report_page;
use crate::providers::api::Api;
use crate::routes::Route;
use crate::services::StorageClient;

#[derive(Properties, PartialEq)]
pub struct CreateProps {
    pub set_page: Callback<Page>,
    pub api: Rc<Api>,
    pub store_key: AttrValue,
    pub storage: Rc<StorageClient>,
    pub set_current_presentation: Callback<Option<Presentation>>,
    pub set_loading: Callback<bool>,
}

#[function_component(CreatePage)]
pub fn create_page(props: &CreateProps) -> Html {
    use_report_page(Page::Create, &props.set_page);

    let navigator = use_navigator();
    let title = use_state(String::new);
    let file_input = use_node_ref();
    let error_msg = use_state(|| None::<String>);

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };

    let storage = props.storage.clone();
    let store_key = props.store_key.clone();
    let set_loading = props.set_loading.clone();
    let set_current_presentation = props.set_current_presentation.clone();

    let on_submit = async_callback!(
        [storage, store_key, set_loading, set_current_presentation, navigator, title, file_input, error_msg]
        |event| {
            let event: SubmitEvent = event;
            event.prevent_default();

            let Some(file) = file_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                error_msg.set(Some("Choose a file to upload".to_string()));
                return;
            };

            error_msg.set(None);
            set_loading.emit(true);
            let result = storage.upload(&store_key, None, &file).await;
            set_loading.emit(false);

            match result {
                Ok(stored) => {
                    let deck_title = if title.trim().is_empty() { stored.name.clone() } else { (*title).clone() };
                    set_current_presentation.emit(Some(Presentation::new(json!({
                        "id": stored.id,
                        "title": deck_title,
                        "bucket": stored.bucket_id,
                        "url": storage.view_url(&stored.bucket_id, &stored.id),
                    }))));
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::View);
                    }
                }
                Err(err) => {
                    warn!("Upload failed: {err}");
                    error_msg.set(Some(format!("Upload failed: {err}")));
                }
            }
        }
    );

    html! {
        <div class="podium-page">
            <h1>{ "New deck" }</h1>
            <form onsubmit={on_submit} style="display: flex; flex-direction: column; gap: 1rem">
                <input
                    type="text"
                    placeholder="Title"
                    value={(*title).clone()}
                    oninput={on_title}
                />
                <input type="file" accept="application/pdf,image/*" ref={file_input} />
                <button class="podium-button" type="submit">{ "Upload" }</button>
            </form>
            if let Some(error) = error_msg.as_ref() {
                <p class="podium-error">{ error.clone() }</p>
            }
        </div>
    }
}
