use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use podium::async_callback;
use podium::guard::redirect_after_sign_out;
use podium::log::{info, warn};
use podium::session::{AuthState, Page};

use crate::hooks::use_report_page;
use crate::routes::Route;
use crate::services::AuthClient;

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub set_page: Callback<Page>,
    pub auth: Rc<AuthClient>,
    pub user: AuthState,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfileProps) -> Html {
    use_report_page(Page::Profile, &props.set_page);

    let navigator = use_navigator();
    let error_msg = use_state(|| None::<String>);
    let auth = props.auth.clone();

    let sign_out = async_callback!([auth, navigator, error_msg] {
        match auth.sign_out().await {
            Ok(()) => {
                info!("Signed out");
                let target = redirect_after_sign_out(Page::Profile).map(Route::from);
                if let (Some(navigator), Some(target)) = (navigator, target) {
                    navigator.replace(&target);
                }
            }
            Err(err) => {
                warn!("Sign-out failed: {err}");
                error_msg.set(Some(err.to_string()));
            }
        }
    });

    let Some(user) = props.user.user() else {
        return html! { <div class="podium-page"><p>{ "Loading profile..." }</p></div> };
    };

    html! {
        <div class="podium-page">
            <h1>{ user.display_name().unwrap_or("Your profile") }</h1>
            <dl>
                <dt>{ "User id" }</dt>
                <dd>{ user.uid.clone() }</dd>
                if let Some(email) = user.field("email") {
                    <dt>{ "Email" }</dt>
                    <dd>{ email }</dd>
                }
            </dl>
            <div style="display: flex; gap: 1rem">
                <Link<Route> to={Route::EditProfile}>{ "Edit profile" }</Link<Route>>
                <button class="podium-button" onclick={sign_out}>{ "Sign out" }</button>
            </div>
            if let Some(error) = error_msg.as_ref() {
                <p class="podium-error">{ error.clone() }</p>
            }
        </div>
    }
}
