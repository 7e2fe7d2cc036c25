mod components;
mod hooks;
mod pages;
mod providers;
mod routes;
mod services;

use yew::prelude::*;
use yew_router::prelude::*;

use podium::config::AppConfig;
use podium::log;

use components::{AuthErrorBanner, Header, Loader};
use hooks::{use_bootstrap, use_context_menu, use_session_guard};
use providers::{
    PaletteProvider, Services, ServicesProvider, SessionProvider, use_services, use_session,
};
use routes::{Route, switch};

#[derive(Properties, PartialEq)]
struct AppProps {
    services: Services,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ServicesProvider services={props.services.clone()}>
            <SessionProvider>
                <PaletteProvider>
                    <BrowserRouter>
                        <Shell />
                    </BrowserRouter>
                </PaletteProvider>
            </SessionProvider>
        </ServicesProvider>
    }
}

/// Everything inside the router: start-up flows, the guard, and the page table.
#[function_component(Shell)]
fn shell() -> Html {
    let services = use_services();
    let session = use_session();

    let bootstrap = use_bootstrap(&services, &session);
    use_session_guard(&session);
    use_context_menu(services.config.disable_context_menu);

    let render = {
        let session = session.clone();
        let services = services.clone();
        Callback::from(move |route: Route| switch(route, &session, &services))
    };

    html! {
        <div class="podium-shell">
            <Header page={session.page} user={session.auth.clone()} />

            if let Some(error) = session.auth_error.clone() {
                <AuthErrorBanner error={AttrValue::from(error)} on_retry={bootstrap.retry_auth.clone()} />
            }

            <Switch<Route> {render} />

            if session.loading {
                <Loader status={session.backend.clone()} on_retry={bootstrap.retry_probe.clone()} />
            }
        </div>
    }
}

fn main() {
    podium::log::setup().expect("Failed to setup logging");

    let config = AppConfig::from_build_env();
    log::info!("Starting Podium against {}", config.backend_url);
    let services = Services::initialize(config);

    yew::Renderer::<App>::with_props(AppProps { services }).render();
}
