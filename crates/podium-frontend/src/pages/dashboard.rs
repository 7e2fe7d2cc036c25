use yew::prelude::*;
use yew_router::prelude::*;

use podium::session::{AuthState, Page};

use crate::hooks::use_report_page;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub set_page: Callback<Page>,
    pub user: AuthState,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardProps) -> Html {
    use_report_page(Page::Dashboard, &props.set_page);

    let greeting = match props.user.user() {
        Some(user) => format!("Welcome back, {}", user.display_name().unwrap_or("presenter")),
        None => "Welcome".to_string(),
    };

    html! {
        <div class="podium-page">
            <h1>{ greeting }</h1>
            <div style="display: flex; gap: 1rem">
                <Link<Route> to={Route::Create} classes="podium-button">{ "New deck" }</Link<Route>>
                <Link<Route> to={Route::Presentations}>{ "My decks" }</Link<Route>>
                <Link<Route> to={Route::Explore}>{ "Explore" }</Link<Route>>
            </div>
        </div>
    }
}
