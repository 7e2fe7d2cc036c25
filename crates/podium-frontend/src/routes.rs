use yew::prelude::*;
use yew_router::prelude::*;

use podium::data::{AppUser, Presentation};
use podium::guard::Redirect;
use podium::session::{Page, SessionAction};

use crate::pages::{
    AboutPage, CreatePage, DashboardPage, EditProfilePage, ExplorePage, HomePage, LoginPage,
    PresentationsPage, PricingPage, ProfilePage, ViewPage,
};
use crate::providers::session::SessionState;
use crate::providers::{SessionHandle, Services};

#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/create")]
    Create,
    #[at("/view")]
    View,
    #[at("/explore")]
    Explore,
    #[at("/presentations")]
    Presentations,
    #[at("/profile")]
    Profile,
    #[at("/about")]
    About,
    #[at("/pricing")]
    Pricing,
    #[at("/editProfile")]
    EditProfile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The page this route's component reports.
    pub fn page(&self) -> Option<Page> {
        let page = match self {
            Route::Home => Page::Home,
            Route::Login => Page::Login,
            Route::Dashboard => Page::Dashboard,
            Route::Create => Page::Create,
            Route::View => Page::View,
            Route::Explore => Page::Explore,
            Route::Presentations => Page::Presentations,
            Route::Profile => Page::Profile,
            Route::About => Page::About,
            Route::Pricing => Page::Pricing,
            Route::EditProfile => Page::EditProfile,
            Route::NotFound => return None,
        };
        Some(page)
    }
}

impl From<Redirect> for Route {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::Login => Route::Login,
        }
    }
}

/// Session setters handed to pages.
#[derive(Clone, PartialEq)]
pub struct Setters {
    pub set_page: Callback<Page>,
    pub set_user: Callback<AppUser>,
    pub set_loading: Callback<bool>,
    pub set_current_presentation: Callback<Option<Presentation>>,
}

impl Setters {
    pub fn new(session: &SessionHandle) -> Self {
        let dispatcher = session.dispatcher();

        Self {
            set_page: setter(&dispatcher, SessionAction::SetPage),
            set_user: setter(&dispatcher, SessionAction::SetUser),
            set_loading: setter(&dispatcher, SessionAction::SetLoading),
            set_current_presentation: setter(&dispatcher, SessionAction::SetCurrentPresentation),
        }
    }
}

fn setter<T: 'static>(
    dispatcher: &UseReducerDispatcher<SessionState>,
    action: fn(T) -> SessionAction,
) -> Callback<T> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |value| dispatcher.dispatch(action(value)))
}

pub fn switch(route: Route, session: &SessionHandle, services: &Services) -> Html {
    let Setters {
        set_page,
        set_user,
        set_loading,
        set_current_presentation,
    } = Setters::new(session);
    let user = session.auth.clone();
    let store_key = services.store_key();

    match route {
        Route::Home => html! { <HomePage {set_page} /> },
        Route::Login => html! {
            <LoginPage
                {set_page}
                api={services.api.clone()}
                auth={services.auth.clone()}
                {set_user}
            />
        },
        Route::Dashboard => html! { <DashboardPage {set_page} {user} /> },
        Route::Create => html! {
            <CreatePage
                {set_page}
                api={services.api.clone()}
                {store_key}
                storage={services.storage.clone()}
                {set_current_presentation}
                {set_loading}
            />
        },
        Route::View => html! {
            <ViewPage
                {set_page}
                api={services.api.clone()}
                current_presentation={session.current_presentation.clone()}
                {set_current_presentation}
                {user}
            />
        },
        Route::Explore => html! {
            <ExplorePage
                {set_page}
                api={services.api.clone()}
                {store_key}
                {user}
                storage={services.storage.clone()}
                {set_loading}
            />
        },
        Route::Presentations => html! {
            <PresentationsPage
                {set_page}
                api={services.api.clone()}
                {store_key}
                {user}
                storage={services.storage.clone()}
                {set_loading}
            />
        },
        Route::Profile => html! {
            <ProfilePage {set_page} auth={services.auth.clone()} {user} />
        },
        Route::About => html! { <AboutPage {set_page} /> },
        Route::Pricing => html! { <PricingPage {set_page} /> },
        Route::EditProfile => html! {
            <EditProfilePage {set_page} api={services.api.clone()} {user} {set_user} />
        },
        Route::NotFound => html! {
            <div class="podium-page">
                <h1>{ "404 Not Found" }</h1>
                <Link<Route> to={Route::Home}>{ "Back to the home page" }</Link<Route>>
            </div>
        },
    }
}
