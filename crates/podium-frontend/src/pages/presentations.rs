use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use podium::session::{AuthState, Page};

use crate::hooks::use_report_page;
use crate::providers::api::Api;
use crate::routes::Route;
use crate::services::StorageClient;

#[derive(Properties, PartialEq)]
pub struct PresentationsProps {
    pub set_page: Callback<Page>,
    pub api: Rc<Api>,
    pub store_key: AttrValue,
    pub user: AuthState,
    pub storage: Rc<StorageClient>,
    pub set_loading: Callback<bool>,
}

#[function_component(PresentationsPage)]
pub fn presentations_page(props: &PresentationsProps) -> Html {
    use_report_page(Page::Presentations, &props.set_page);

    let owner = props
        .user
        .user()
        .map(|user| user.display_name().unwrap_or(&user.uid).to_string());

    html! {
        <div class="podium-page">
            <h1>{ "My decks" }</h1>
            if let Some(owner) = owner {
                <p>{ format!("Decks uploaded by {owner} are stored in bucket {}.", props.store_key) }</p>
            }
            <Link<Route> to={Route::Create} classes="podium-button">{ "New deck" }</Link<Route>>
        </div>
    }
}
