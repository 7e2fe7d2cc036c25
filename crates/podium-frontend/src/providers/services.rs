use std::rc::Rc;

use yew::prelude::*;

use podium::config::AppConfig;
use podium::log::warn;

use crate::providers::api::{self, Api};
use crate::services::{AuthClient, StorageClient};

/// The clients every page may be handed, built once at start-up.
#[derive(Clone)]
pub struct Services {
    pub config: Rc<AppConfig>,
    pub api: Rc<Api>,
    pub auth: Rc<AuthClient>,
    pub storage: Rc<StorageClient>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.api, &other.api)
            && Rc::ptr_eq(&self.auth, &other.auth)
            && Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl Services {
    pub fn initialize(config: AppConfig) -> Self {
        for missing in config.missing() {
            warn!("{missing} is not set");
        }

        Self {
            api: Rc::new(api::create(&config)),
            auth: Rc::new(AuthClient::initialize(&config.identity)),
            storage: Rc::new(StorageClient::new(config.storage.clone())),
            config: Rc::new(config),
        }
    }

    /// The storage bucket key pages upload into.
    pub fn store_key(&self) -> AttrValue {
        AttrValue::from(self.storage.default_bucket().to_string())
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProviderProps {
    pub services: Services,
    pub children: Children,
}

#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    html! {
        <ContextProvider<Services> context={props.services.clone()}>
            {props.children.clone()}
        </ContextProvider<Services>>
    }
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().expect("use_services must be used within a ServicesProvider")
}
