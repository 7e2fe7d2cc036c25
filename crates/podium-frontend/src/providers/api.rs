use gloo_timers::future::TimeoutFuture;

use podium::api::{ApiClient, ApiResult, HttpApiClient, user_data_headers, with_timeout};
use podium::bootstrap::BackendApi;
use podium::config::AppConfig;
use podium::data::{AppUser, GetUserResponse, IdentityUser, ProbeResponse};

/// The Podium backend API, as seen from the browser.
pub struct Api {
    client: HttpApiClient,
    probe_timeout_ms: u32,
}

impl PartialEq for Api {
    fn eq(&self, other: &Self) -> bool {
        self.client.root_url() == other.client.root_url()
            && self.probe_timeout_ms == other.probe_timeout_ms
    }
}

impl Api {
    pub fn new(base_url: &str, probe_timeout_ms: u32) -> Self {
        let mut client = HttpApiClient::new(base_url);
        client.set_header("accept", "application/json");

        Api {
            client,
            probe_timeout_ms,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl BackendApi for Api {
    async fn probe(&self) -> ApiResult<ProbeResponse> {
        with_timeout(
            self.client.get::<ProbeResponse>("/"),
            TimeoutFuture::new(self.probe_timeout_ms),
            self.probe_timeout_ms,
        )
        .await
    }

    async fn get_user(&self, identity: &IdentityUser) -> ApiResult<AppUser> {
        let headers = user_data_headers(identity)?;
        let response: GetUserResponse = self.client.get_with_headers("/getUser", &headers).await?;
        Ok(response.user)
    }
}

/// Create the API client from the application configuration.
pub fn create(config: &AppConfig) -> Api {
    Api::new(&config.backend_url, config.probe_timeout_ms)
}
