use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use podium::bootstrap::{on_auth_emission, run_probe};
use podium::data::IdentityUser;
use podium::log::debug;
use podium::session::{BackendStatus, SessionAction};

use crate::providers::{SessionHandle, Services};

/// Retry handles for the two start-up flows.
#[derive(Clone, PartialEq)]
pub struct Bootstrap {
    /// Probe the backend again.
    pub retry_probe: Callback<()>,
    /// Load the profile of the last signed-in identity again.
    pub retry_auth: Callback<()>,
}

/// Probe the backend and follow the identity provider for as long as the
/// calling component is mounted.
#[hook]
pub fn use_bootstrap(services: &Services, session: &SessionHandle) -> Bootstrap {
    let last_identity = use_mut_ref(|| None::<IdentityUser>);

    let retry_probe = {
        let api = services.api.clone();
        let session = session.clone();

        Callback::from(move |_: ()| {
            let api = api.clone();
            let session = session.clone();

            session.dispatch(SessionAction::BackendReported(BackendStatus::Pending));
            spawn_local(async move {
                session.dispatch(run_probe(&*api).await);
            });
        })
    };

    let retry_auth = {
        let api = services.api.clone();
        let session = session.clone();
        let last_identity = last_identity.clone();

        Callback::from(move |_: ()| {
            let Some(identity) = last_identity.borrow().clone() else {
                debug!("No signed-in identity to reload");
                return;
            };
            let api = api.clone();
            let session = session.clone();

            spawn_local(async move {
                on_auth_emission(&*api, Some(identity), |action| session.dispatch(action)).await;
            });
        })
    };

    {
        let retry_probe = retry_probe.clone();
        let api = services.api.clone();
        let auth = services.auth.clone();
        let session = session.clone();

        use_effect_with((), move |_| {
            retry_probe.emit(());

            let subscription = auth.subscribe(move |identity| {
                *last_identity.borrow_mut() = identity.clone();

                let api = api.clone();
                let session = session.clone();
                spawn_local(async move {
                    on_auth_emission(&*api, identity, |action| session.dispatch(action)).await;
                });
            });

            move || drop(subscription)
        });
    }

    Bootstrap {
        retry_probe,
        retry_auth,
    }
}
