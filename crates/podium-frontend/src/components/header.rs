use yew::prelude::*;
use yew_router::prelude::*;

use podium::session::{AuthState, Page};

use crate::providers::use_palette;
use crate::routes::Route;

const NAV: [(Route, &str); 5] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Presentations, "My decks"),
    (Route::Explore, "Explore"),
    (Route::Pricing, "Pricing"),
    (Route::About, "About"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub page: Page,
    pub user: AuthState,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let palette = use_palette();

    let nav_link = |(route, label): (Route, &'static str)| {
        let active = route.page() == Some(props.page);
        html! {
            <Link<Route> to={route} classes={classes!(active.then_some("active"))}>
                { label }
            </Link<Route>>
        }
    };

    let account = match &props.user {
        AuthState::Authenticated(user) => html! {
            <Link<Route> to={Route::Profile}>
                { user.display_name().unwrap_or(&user.uid).to_string() }
            </Link<Route>>
        },
        AuthState::Anonymous => html! {
            <Link<Route> to={Route::Login}>{ "Sign in" }</Link<Route>>
        },
        AuthState::Unchecked | AuthState::Resolving => html! {},
    };

    html! {
        <header class="podium-header">
            <Link<Route> to={Route::Home}>
                <strong style={format!("color: {}", palette.primary)}>{ "Podium" }</strong>
            </Link<Route>>
            <nav style="display: flex; gap: 1rem; flex: 1">
                { for NAV.into_iter().map(nav_link) }
            </nav>
            { account }
        </header>
    }
}
