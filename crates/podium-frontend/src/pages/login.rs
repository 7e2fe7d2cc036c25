use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use podium::async_callback;
use podium::bootstrap::BackendApi;
use podium::data::AppUser;
use podium::log::{info, warn};
use podium::session::Page;

use crate::hooks::use_report_page;
use crate::providers::api::Api;
use crate::routes::Route;
use crate::services::AuthClient;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub set_page: Callback<Page>,
    pub api: Rc<Api>,
    pub auth: Rc<AuthClient>,
    pub set_user: Callback<AppUser>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginProps) -> Html {
    use_report_page(Page::Login, &props.set_page);

    let navigator = use_navigator();
    let busy = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let api = props.api.clone();
    let auth = props.auth.clone();
    let set_user = props.set_user.clone();

    let sign_in = async_callback!([api, auth, set_user, navigator, busy, error_msg] {
        busy.set(true);
        error_msg.set(None);

        let result = match auth.sign_in_with_google().await {
            Ok(identity) => api.get_user(&identity).await.map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };
        busy.set(false);

        match result {
            Ok(user) => {
                info!("Signed in as {}", user.uid);
                set_user.emit(user);
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
            Err(err) => {
                warn!("Sign-in failed: {err}");
                error_msg.set(Some(err));
            }
        }
    });

    html! {
        <div class="podium-page">
            <h1>{ "Sign in" }</h1>
            <button
                class="podium-button"
                onclick={sign_in}
                disabled={*busy || !props.auth.is_available()}
            >
                { if *busy { "Signing in..." } else { "Continue with Google" } }
            </button>
            if let Some(error) = error_msg.as_ref() {
                <p class="podium-error">{ error.clone() }</p>
            }
        </div>
    }
}
