use yew::prelude::*;
use yew_router::prelude::*;

use podium::session::Page;

use crate::hooks::use_report_page;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub set_page: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomeProps) -> Html {
    use_report_page(Page::Home, &props.set_page);

    html! {
        <div class="podium-page">
            <h1>{ "Present with Podium" }</h1>
            <p>{ "Build a deck, upload your assets, and share it with anyone." }</p>
            <Link<Route> to={Route::Dashboard} classes="podium-button">
                { "Get started" }
            </Link<Route>>
        </div>
    }
}
