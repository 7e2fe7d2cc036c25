use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use podium::data::AppUser;
use podium::session::{AuthState, Page};

use crate::hooks::use_report_page;
use crate::providers::api::Api;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct EditProfileProps {
    pub set_page: Callback<Page>,
    pub api: Rc<Api>,
    pub user: AuthState,
    pub set_user: Callback<AppUser>,
}

#[function_component(EditProfilePage)]
pub fn edit_profile_page(props: &EditProfileProps) -> Html {
    use_report_page(Page::EditProfile, &props.set_page);

    let navigator = use_navigator();
    let current_name = props
        .user
        .user()
        .and_then(|user| user.field("displayName"))
        .unwrap_or_default()
        .to_string();
    let name = use_state(move || current_name);

    let Some(user) = props.user.user().cloned() else {
        return html! { <div class="podium-page"><p>{ "Loading profile..." }</p></div> };
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_save = {
        let name = name.clone();
        let set_user = props.set_user.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            set_user.emit(user.clone().with_display_name(&name));
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Profile);
            }
        })
    };

    html! {
        <div class="podium-page">
            <h1>{ "Edit profile" }</h1>
            <p>{ "Changes apply to this browser session only. Your account keeps the name from your sign-in provider." }</p>
            <form onsubmit={on_save} style="display: flex; gap: 0.5rem">
                <input type="text" placeholder="Display name" value={(*name).clone()} oninput={on_name} />
                <button class="podium-button" type="submit">{ "Apply" }</button>
            </form>
        </div>
    }
}
