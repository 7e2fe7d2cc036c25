//! Start-up flows of the shell: the backend liveness probe and the reaction
//! to each auth-state emission of the identity provider.
//!
//! Both flows talk to the backend through [`BackendApi`] and report their
//! results as [`SessionAction`]s, so they can run against a fake backend.

use crate::api::ApiResult;
use crate::data::{AppUser, IdentityUser, ProbeResponse};
use crate::log::{debug, info, warn};
use crate::session::{BackendStatus, SessionAction};

/// The two backend endpoints the shell itself calls.
#[async_trait::async_trait(?Send)]
pub trait BackendApi {
    /// `GET /`.
    async fn probe(&self) -> ApiResult<ProbeResponse>;

    /// `GET /getUser` with the provider's user in the `x-user-data` header.
    async fn get_user(&self, identity: &IdentityUser) -> ApiResult<AppUser>;
}

/// Classify the probe outcome.
pub fn probe_status(result: ApiResult<ProbeResponse>) -> BackendStatus {
    match result {
        Ok(response) if response.is_connected() => BackendStatus::Connected,
        Ok(response) => BackendStatus::Unexpected(response.message),
        Err(err) => BackendStatus::Unreachable(err.to_string()),
    }
}

/// Probe the backend once. Only a `"connected"` answer clears the loading
/// flag; anything else is reported and left for the user to retry.
pub async fn run_probe<A>(api: &A) -> SessionAction
where
    A: BackendApi + ?Sized,
{
    let status = probe_status(api.probe().await);
    match &status {
        BackendStatus::Connected => info!("Backend connected"),
        other => warn!("Backend probe failed: {}", other.describe()),
    }
    SessionAction::BackendReported(status)
}

/// Handle one emission of the auth-state stream.
///
/// `dispatch` is called with `UserChecked` (or `SignedOut`) before any network
/// traffic, then with the profile lookup's result.
pub async fn on_auth_emission<A, F>(api: &A, identity: Option<IdentityUser>, dispatch: F)
where
    A: BackendApi + ?Sized,
    F: Fn(SessionAction),
{
    let Some(identity) = identity else {
        debug!("Identity provider reports no user");
        dispatch(SessionAction::SignedOut);
        return;
    };

    dispatch(SessionAction::UserChecked);

    match api.get_user(&identity).await {
        Ok(user) => {
            info!("Loaded profile for {}", user.uid);
            dispatch(SessionAction::SetUser(user));
        }
        Err(err) => {
            warn!(
                "Failed to load profile for {}: {err}",
                identity.uid().unwrap_or("<unknown>")
            );
            dispatch(SessionAction::AuthFailed(err.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, user_data_headers, with_timeout};
    use crate::data::USER_DATA_HEADER;
    use crate::session::{AuthState, Session};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeBackend {
        probe_message: Option<String>,
        user: Option<AppUser>,
        sent_headers: RefCell<Vec<String>>,
    }

    #[async_trait::async_trait(?Send)]
    impl BackendApi for FakeBackend {
        async fn probe(&self) -> ApiResult<ProbeResponse> {
            self.probe_message
                .clone()
                .map(|message| ProbeResponse { message })
                .ok_or(ApiError::InternalServerError)
        }

        async fn get_user(&self, identity: &IdentityUser) -> ApiResult<AppUser> {
            let headers = user_data_headers(identity)?;
            self.sent_headers
                .borrow_mut()
                .push(headers.get(USER_DATA_HEADER).unwrap_or_default().to_string());
            self.user.clone().ok_or(ApiError::UnauthorizedAccess)
        }
    }

    fn run_emission(backend: &FakeBackend, identity: Option<IdentityUser>) -> Session {
        run_emission_on(Session::default(), backend, identity)
    }

    fn run_emission_on(
        session: Session,
        backend: &FakeBackend,
        identity: Option<IdentityUser>,
    ) -> Session {
        let session = RefCell::new(session);
        block_on(on_auth_emission(backend, identity, |action| {
            session.borrow_mut().apply(action)
        }));
        session.into_inner()
    }

    #[test]
    fn connected_probe_clears_loading() {
        let backend = FakeBackend {
            probe_message: Some("connected".to_string()),
            ..Default::default()
        };

        let mut session = Session::default();
        session.apply(block_on(run_probe(&backend)));

        assert!(!session.loading);
        assert_eq!(session.backend, BackendStatus::Connected);
    }

    #[test]
    fn other_probe_message_keeps_loading() {
        let backend = FakeBackend {
            probe_message: Some("error".to_string()),
            ..Default::default()
        };

        let mut session = Session::default();
        session.apply(block_on(run_probe(&backend)));

        assert!(session.loading);
        assert_eq!(session.backend, BackendStatus::Unexpected("error".to_string()));
    }

    #[test]
    fn unreachable_backend_keeps_loading() {
        let backend = FakeBackend::default();

        let mut session = Session::default();
        session.apply(block_on(run_probe(&backend)));

        assert!(session.loading);
        assert!(matches!(session.backend, BackendStatus::Unreachable(_)));
    }

    #[test]
    fn timed_out_probe_is_a_visible_failure() {
        let stalled = futures::future::pending::<ApiResult<ProbeResponse>>();
        let result = block_on(with_timeout(stalled, futures::future::ready(()), 10_000));

        let mut session = Session::default();
        session.apply(SessionAction::BackendReported(probe_status(result)));

        assert!(session.loading);
        assert_eq!(
            session.backend,
            BackendStatus::Unreachable("Request timed out after 10000ms".to_string())
        );
    }

    #[test]
    fn signed_in_emission_loads_profile_with_header() {
        let raw = json!({ "uid": "fb-1", "email": "ada@example.com" });
        let backend = FakeBackend {
            user: Some(AppUser::new("abc")),
            ..Default::default()
        };

        let session = run_emission(&backend, Some(IdentityUser::new(raw.clone())));

        assert_eq!(
            backend.sent_headers.borrow().as_slice(),
            [serde_json::to_string(&raw).unwrap()]
        );
        assert!(session.user_checked());
        assert_eq!(session.auth, AuthState::Authenticated(AppUser::new("abc")));
        assert_eq!(
            serde_json::to_value(session.auth.to_user().unwrap()).unwrap(),
            json!({ "uid": "abc" })
        );
    }

    #[test]
    fn empty_emission_sets_sentinel() {
        let backend = FakeBackend::default();
        let session = run_emission(&backend, None);

        assert!(session.user_checked());
        assert_eq!(session.auth.to_user(), Some(AppUser::anonymous()));
        assert!(backend.sent_headers.borrow().is_empty());
    }

    #[test]
    fn failed_profile_lookup_does_not_redirect() {
        let backend = FakeBackend::default();
        let mut session = run_emission(&backend, Some(IdentityUser::new(json!({ "uid": "x" }))));

        assert_eq!(session.auth, AuthState::Resolving);
        assert!(session.auth_error.is_some());

        session.apply(SessionAction::SetPage(crate::session::Page::Dashboard));
        assert_eq!(session.redirect(), None);
    }

    #[test]
    fn reloading_the_same_identity_recovers_from_a_failed_lookup() {
        let identity = IdentityUser::new(json!({ "uid": "fb-3" }));

        let failed = run_emission(&FakeBackend::default(), Some(identity.clone()));
        assert_eq!(
            failed.auth_error.as_deref(),
            Some("Unauthorized Access")
        );

        let recovered = FakeBackend {
            user: Some(AppUser::new("abc")),
            ..Default::default()
        };
        let session = run_emission_on(failed, &recovered, Some(identity));

        assert!(session.auth_error.is_none());
        assert_eq!(session.auth, AuthState::Authenticated(AppUser::new("abc")));
    }

    #[test]
    fn user_checked_is_dispatched_before_the_lookup() {
        let backend = FakeBackend {
            user: Some(AppUser::new("abc")),
            ..Default::default()
        };
        let actions = RefCell::new(Vec::new());

        block_on(on_auth_emission(
            &backend,
            Some(IdentityUser::new(json!({ "uid": "fb-1" }))),
            |action| actions.borrow_mut().push(action),
        ));

        assert_eq!(
            actions.into_inner(),
            vec![
                SessionAction::UserChecked,
                SessionAction::SetUser(AppUser::new("abc"))
            ]
        );
    }
}
