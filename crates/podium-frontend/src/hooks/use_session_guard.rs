use yew::prelude::*;
use yew_router::prelude::*;

use podium::log::debug;

use crate::providers::SessionHandle;
use crate::routes::Route;

/// Re-check the guard whenever the page or the auth-check flag changes and
/// replace the current route when it says so.
#[hook]
pub fn use_session_guard(session: &SessionHandle) {
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let deps = session.guard_key();

    let session = session.clone();
    use_effect_with(deps, move |_| {
        let Some(redirect) = session.redirect() else {
            return;
        };
        let target = Route::from(redirect);

        if route.as_ref() == Some(&target) {
            return;
        }
        if let Some(navigator) = navigator {
            debug!("Guard redirects {} to {}", session.page, redirect.path());
            navigator.replace(&target);
        }
    });
}
