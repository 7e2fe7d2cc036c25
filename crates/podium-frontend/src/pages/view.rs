use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use podium::data::Presentation;
use podium::session::{AuthState, Page};

use crate::hooks::use_report_page;
use crate::providers::api::Api;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct ViewProps {
    pub set_page: Callback<Page>,
    pub api: Rc<Api>,
    pub current_presentation: Option<Presentation>,
    pub set_current_presentation: Callback<Option<Presentation>>,
    pub user: AuthState,
}

#[function_component(ViewPage)]
pub fn view_page(props: &ViewProps) -> Html {
    use_report_page(Page::View, &props.set_page);

    let Some(presentation) = props.current_presentation.as_ref() else {
        return html! {
            <div class="podium-page">
                <h1>{ "Nothing open" }</h1>
                <Link<Route> to={Route::Presentations}>{ "Pick a deck" }</Link<Route>>
            </div>
        };
    };

    let close = props.set_current_presentation.reform(|_: MouseEvent| None);
    let owner = presentation.get("owner");
    let is_owner = matches!(
        (props.user.user(), owner),
        (Some(user), Some(owner)) if user.uid == owner
    );

    html! {
        <div class="podium-page">
            <h1>{ presentation.title().unwrap_or("Untitled deck") }</h1>
            if is_owner {
                <p>{ "You own this deck." }</p>
            }
            if let Some(url) = presentation.get("url") {
                <iframe src={url.to_string()} style="width: 100%; height: 70vh; border: none" />
            }
            <button class="podium-button" onclick={close}>{ "Close" }</button>
        </div>
    }
}
