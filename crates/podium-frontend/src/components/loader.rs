use yew::prelude::*;

use podium::session::BackendStatus;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub status: BackendStatus,
    pub on_retry: Callback<()>,
}

/// Full-screen overlay shown while the session is loading. When the backend
/// probe failed it shows why, with a retry button.
#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let retry = props.on_retry.reform(|_: MouseEvent| ());

    html! {
        <div class="podium-loader" role="status">
            if props.status.is_failure() {
                <p class="podium-error">{ props.status.describe() }</p>
                <button class="podium-button" onclick={retry}>{ "Retry" }</button>
            } else {
                <div class="podium-spinner"></div>
            }
        </div>
    }
}
