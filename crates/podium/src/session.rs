//! The application session: which page is showing, who is signed in, whether
//! the backend answered, and the presentation currently open.
//!
//! The session is only ever changed through [`SessionAction`]s, applied with
//! [`Session::apply`]. The frontend wraps it in a reducer so every component
//! sees the same value.

use std::fmt;

use crate::data::{AppUser, Presentation};

/// The page a routed component reports when it mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    /// Nothing has mounted yet.
    #[default]
    Unset,
    Home,
    Login,
    Dashboard,
    Create,
    View,
    Explore,
    Presentations,
    Profile,
    EditProfile,
    About,
    Pricing,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Unset => "",
            Page::Home => "home",
            Page::Login => "login",
            Page::Dashboard => "dashboard",
            Page::Create => "create",
            Page::View => "view",
            Page::Explore => "explore",
            Page::Presentations => "presentations",
            Page::Profile => "profile",
            Page::EditProfile => "editProfile",
            Page::About => "about",
            Page::Pricing => "pricing",
        }
    }

    /// Pages an anonymous visitor may stay on.
    pub fn is_public(&self) -> bool {
        matches!(self, Page::Home)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the shell knows about the current user.
///
/// `Unchecked` and `Anonymous` are deliberately different: the first means the
/// identity provider has not reported yet, the second that it reported nobody.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
    #[default]
    Unchecked,
    /// The provider reported a signed-in user; the application profile has not
    /// been loaded from the backend.
    Resolving,
    /// Checked, nobody signed in. Corresponds to the sentinel user.
    Anonymous,
    Authenticated(AppUser),
}

impl AuthState {
    /// Classify a user record; the sentinel uid maps to `Anonymous`.
    pub fn from_user(user: AppUser) -> Self {
        if user.is_anonymous() {
            AuthState::Anonymous
        } else {
            AuthState::Authenticated(user)
        }
    }

    pub fn is_checked(&self) -> bool {
        !matches!(self, AuthState::Unchecked)
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, AuthState::Anonymous)
    }

    pub fn user(&self) -> Option<&AppUser> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The user object as the backend would spell it. `None` while unchecked
    /// or resolving.
    pub fn to_user(&self) -> Option<AppUser> {
        match self {
            AuthState::Anonymous => Some(AppUser::anonymous()),
            AuthState::Authenticated(user) => Some(user.clone()),
            AuthState::Unchecked | AuthState::Resolving => None,
        }
    }
}

/// Outcome of the backend liveness probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Pending,
    Connected,
    /// The backend answered with a message other than `"connected"`.
    Unexpected(String),
    /// The request failed or timed out.
    Unreachable(String),
}

impl BackendStatus {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            BackendStatus::Unexpected(_) | BackendStatus::Unreachable(_)
        )
    }

    pub fn describe(&self) -> String {
        match self {
            BackendStatus::Pending => "Connecting to the server...".to_string(),
            BackendStatus::Connected => "Connected".to_string(),
            BackendStatus::Unexpected(message) => {
                format!("The server answered {message:?} instead of \"connected\"")
            }
            BackendStatus::Unreachable(error) => format!("The server is unreachable: {error}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub page: Page,
    pub auth: AuthState,
    pub loading: bool,
    pub current_presentation: Option<Presentation>,
    pub backend: BackendStatus,
    pub auth_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            page: Page::Unset,
            auth: AuthState::Unchecked,
            loading: true,
            current_presentation: None,
            backend: BackendStatus::Pending,
            auth_error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetPage(Page),
    /// The identity provider reported a signed-in user.
    UserChecked,
    SetUser(AppUser),
    /// The identity provider reported nobody.
    SignedOut,
    /// Loading the application profile failed.
    AuthFailed(String),
    SetLoading(bool),
    SetCurrentPresentation(Option<Presentation>),
    BackendReported(BackendStatus),
}

impl Session {
    pub fn user_checked(&self) -> bool {
        self.auth.is_checked()
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::SetPage(page) => self.page = page,
            SessionAction::UserChecked => {
                // A repeated emission must not drop an already loaded profile.
                if !matches!(self.auth, AuthState::Authenticated(_)) {
                    self.auth = AuthState::Resolving;
                }
                self.auth_error = None;
            }
            SessionAction::SetUser(user) => {
                self.auth = AuthState::from_user(user);
                self.auth_error = None;
            }
            SessionAction::SignedOut => {
                self.auth = AuthState::Anonymous;
                self.auth_error = None;
            }
            SessionAction::AuthFailed(error) => self.auth_error = Some(error),
            SessionAction::SetLoading(loading) => self.loading = loading,
            SessionAction::SetCurrentPresentation(presentation) => {
                self.current_presentation = presentation
            }
            SessionAction::BackendReported(status) => {
                if status == BackendStatus::Connected {
                    self.loading = false;
                }
                self.backend = status;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn applied(actions: impl IntoIterator<Item = SessionAction>) -> Session {
        let mut session = Session::default();
        for action in actions {
            session.apply(action);
        }
        session
    }

    #[test]
    fn starts_unchecked_and_loading() {
        let session = Session::default();
        assert_eq!(session.page, Page::Unset);
        assert!(!session.user_checked());
        assert!(session.loading);
        assert_eq!(session.backend, BackendStatus::Pending);
        assert!(session.current_presentation.is_none());
    }

    #[test]
    fn three_auth_states_stay_distinct() {
        let unchecked = Session::default();
        let anonymous = applied([SessionAction::SignedOut]);
        let signed_in = applied([SessionAction::SetUser(AppUser::new("abc"))]);

        assert!(!unchecked.user_checked());
        assert!(anonymous.user_checked() && anonymous.auth.is_anonymous());
        assert!(signed_in.user_checked() && !signed_in.auth.is_anonymous());
        assert_eq!(signed_in.auth.user().map(|u| u.uid.as_str()), Some("abc"));
    }

    #[test]
    fn sentinel_user_is_anonymous() {
        let session = applied([SessionAction::SetUser(AppUser::anonymous())]);
        assert_eq!(session.auth, AuthState::Anonymous);
        assert_eq!(session.auth.to_user(), Some(AppUser::anonymous()));
    }

    #[test]
    fn user_checked_is_idempotent_and_keeps_profile() {
        let session = applied([SessionAction::UserChecked, SessionAction::UserChecked]);
        assert_eq!(session.auth, AuthState::Resolving);
        assert!(session.user_checked());

        let session = applied([
            SessionAction::SetUser(AppUser::new("abc")),
            SessionAction::UserChecked,
        ]);
        assert_eq!(session.auth, AuthState::Authenticated(AppUser::new("abc")));
    }

    #[test]
    fn connected_probe_clears_loading() {
        let session = applied([SessionAction::BackendReported(BackendStatus::Connected)]);
        assert!(!session.loading);
    }

    #[test]
    fn failed_probe_keeps_loading_but_is_visible() {
        let session = applied([SessionAction::BackendReported(BackendStatus::Unexpected(
            "error".to_string(),
        ))]);
        assert!(session.loading);
        assert!(session.backend.is_failure());
        assert!(session.backend.describe().contains("error"));

        let session = applied([SessionAction::BackendReported(
            BackendStatus::Unreachable("timeout".to_string()),
        )]);
        assert!(session.loading);
        assert!(session.backend.is_failure());
    }

    #[test]
    fn auth_failure_is_recorded_and_cleared_on_success() {
        let session = applied([
            SessionAction::UserChecked,
            SessionAction::AuthFailed("Internal Server Error".to_string()),
        ]);
        assert_eq!(session.auth, AuthState::Resolving);
        assert_eq!(session.auth_error.as_deref(), Some("Internal Server Error"));

        let session = applied([
            SessionAction::UserChecked,
            SessionAction::AuthFailed("boom".to_string()),
            SessionAction::SetUser(AppUser::new("abc")),
        ]);
        assert!(session.auth_error.is_none());
    }

    #[test]
    fn pages_can_toggle_loading_and_presentation() {
        let deck = Presentation::new(json!({ "id": "p1", "title": "Q3 review" }));
        let session = applied([
            SessionAction::BackendReported(BackendStatus::Connected),
            SessionAction::SetLoading(true),
            SessionAction::SetCurrentPresentation(Some(deck.clone())),
        ]);

        assert!(session.loading);
        assert_eq!(session.current_presentation, Some(deck));
    }

    #[test]
    fn page_identifiers() {
        assert_eq!(Page::Unset.as_str(), "");
        assert_eq!(Page::EditProfile.to_string(), "editProfile");
        assert!(Page::Home.is_public());
        assert!(!Page::Login.is_public());
    }
}
