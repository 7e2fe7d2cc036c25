//! The session guard: anonymous visitors may only stay on the home page.

use crate::session::{AuthState, Page, Session};

/// Where the guard sends the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => "/login",
        }
    }
}

/// Decide whether the visitor must be sent elsewhere.
///
/// Nothing happens until the identity provider has reported, so the first
/// render never flashes a redirect. Only the sentinel user is redirected;
/// a user whose profile is still loading is not.
pub fn redirect_for(page: Page, auth: &AuthState) -> Option<Redirect> {
    if !auth.is_checked() {
        return None;
    }

    match auth {
        AuthState::Anonymous if !page.is_public() => Some(Redirect::Login),
        _ => None,
    }
}

/// Where to send a visitor who just signed out while on `page`.
///
/// Signing out moves an already checked session from authenticated to
/// anonymous, which leaves [`Session::guard_key`] unchanged, so the page
/// that signs out must navigate itself.
pub fn redirect_after_sign_out(page: Page) -> Option<Redirect> {
    redirect_for(page, &AuthState::Anonymous)
}

impl Session {
    pub fn redirect(&self) -> Option<Redirect> {
        redirect_for(self.page, &self.auth)
    }

    /// The values the guard is re-evaluated on.
    pub fn guard_key(&self) -> (Page, bool) {
        (self.page, self.user_checked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AppUser;
    use crate::session::SessionAction;

    const ALL_PAGES: [Page; 12] = [
        Page::Unset,
        Page::Home,
        Page::Login,
        Page::Dashboard,
        Page::Create,
        Page::View,
        Page::Explore,
        Page::Presentations,
        Page::Profile,
        Page::EditProfile,
        Page::About,
        Page::Pricing,
    ];

    #[test]
    fn unchecked_never_redirects() {
        for page in ALL_PAGES {
            assert_eq!(redirect_for(page, &AuthState::Unchecked), None, "{page:?}");
        }
    }

    #[test]
    fn anonymous_off_home_goes_to_login() {
        for page in ALL_PAGES.into_iter().filter(|p| *p != Page::Home) {
            assert_eq!(
                redirect_for(page, &AuthState::Anonymous),
                Some(Redirect::Login),
                "{page:?}"
            );
        }
        assert_eq!(Redirect::Login.path(), "/login");
    }

    #[test]
    fn anonymous_on_home_stays() {
        assert_eq!(redirect_for(Page::Home, &AuthState::Anonymous), None);
    }

    #[test]
    fn non_sentinel_users_never_redirect() {
        let signed_in = AuthState::Authenticated(AppUser::new("abc"));
        for page in ALL_PAGES {
            assert_eq!(redirect_for(page, &signed_in), None, "{page:?}");
            assert_eq!(redirect_for(page, &AuthState::Resolving), None, "{page:?}");
        }
    }

    #[test]
    fn sign_out_needs_an_explicit_redirect() {
        let mut session = Session::default();
        session.apply(SessionAction::SetUser(AppUser::new("abc")));
        session.apply(SessionAction::SetPage(Page::Profile));
        let before = session.guard_key();

        session.apply(SessionAction::SignedOut);

        assert_eq!(session.guard_key(), before);
        assert_eq!(session.redirect(), Some(Redirect::Login));
        assert_eq!(redirect_after_sign_out(Page::Profile), session.redirect());
    }

    #[test]
    fn sign_out_on_home_stays() {
        assert_eq!(redirect_after_sign_out(Page::Home), None);
    }

    #[test]
    fn session_redirect_follows_page_changes() {
        let mut session = Session::default();
        session.apply(SessionAction::SetPage(Page::Dashboard));
        assert_eq!(session.redirect(), None);

        session.apply(SessionAction::SignedOut);
        assert_eq!(session.redirect(), Some(Redirect::Login));

        session.apply(SessionAction::SetPage(Page::Home));
        assert_eq!(session.redirect(), None);
    }
}
