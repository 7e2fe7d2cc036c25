use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthErrorBannerProps {
    pub error: AttrValue,
    pub on_retry: Callback<()>,
}

/// Shown while a signed-in user's profile could not be loaded.
#[function_component(AuthErrorBanner)]
pub fn auth_error_banner(props: &AuthErrorBannerProps) -> Html {
    let retry = props.on_retry.reform(|_: MouseEvent| ());

    html! {
        <div class="podium-banner" role="alert">
            <span class="podium-error">
                { format!("Your profile could not be loaded: {}", props.error) }
            </span>
            <button class="podium-button" onclick={retry}>{ "Retry" }</button>
        </div>
    }
}
