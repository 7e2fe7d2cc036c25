use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use podium::async_callback;
use podium::log::warn;
use podium::session::{AuthState, Page};

use crate::hooks::use_report_page;
use crate::providers::api::Api;
use crate::services::StorageClient;

#[derive(Properties, PartialEq)]
pub struct ExploreProps {
    pub set_page: Callback<Page>,
    pub api: Rc<Api>,
    pub store_key: AttrValue,
    pub user: AuthState,
    pub storage: Rc<StorageClient>,
    pub set_loading: Callback<bool>,
}

/// A deck found by key, with the size of its stored asset.
#[derive(Clone, PartialEq)]
struct Found {
    key: String,
    size: usize,
    url: String,
}

#[function_component(ExplorePage)]
pub fn explore_page(props: &ExploreProps) -> Html {
    use_report_page(Page::Explore, &props.set_page);

    let key = use_state(String::new);
    let found = use_state(|| None::<Found>);
    let error_msg = use_state(|| None::<String>);

    let on_key = {
        let key = key.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                key.set(input.value().trim().to_string());
            }
        })
    };

    let storage = props.storage.clone();
    let store_key = props.store_key.clone();
    let set_loading = props.set_loading.clone();

    let lookup = async_callback!([storage, store_key, set_loading, key, found, error_msg] {
        if key.is_empty() {
            return;
        }

        error_msg.set(None);
        set_loading.emit(true);
        let result = storage.fetch(&store_key, &key).await;
        set_loading.emit(false);

        match result {
            Ok(bytes) => found.set(Some(Found {
                key: (*key).clone(),
                size: bytes.len(),
                url: storage.view_url(&store_key, &key),
            })),
            Err(err) => {
                warn!("Lookup of {} failed: {err}", *key);
                found.set(None);
                error_msg.set(Some(format!("No deck with key {}", *key)));
            }
        }
    });

    html! {
        <div class="podium-page">
            <h1>{ "Explore" }</h1>
            <p>{ "Open a shared deck by its key." }</p>
            <div style="display: flex; gap: 0.5rem">
                <input type="text" placeholder="Deck key" value={(*key).clone()} oninput={on_key} />
                <button class="podium-button" onclick={lookup}>{ "Open" }</button>
            </div>
            if let Some(error) = error_msg.as_ref() {
                <p class="podium-error">{ error.clone() }</p>
            }
            if let Some(deck) = found.as_ref() {
                <p>
                    <a href={deck.url.clone()} target="_blank">{ deck.key.clone() }</a>
                    { format!(" ({} KiB)", deck.size.div_ceil(1024)) }
                </p>
            }
            if props.user.user().is_none() {
                <p>{ "Sign in to publish your own decks." }</p>
            }
        </div>
    }
}
