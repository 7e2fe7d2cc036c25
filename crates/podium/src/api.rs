//! HTTP transport shared by every client of the Podium backend and the
//! object-storage service.

use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::Response;
use std::collections::HashMap;
use std::future::Future;

use crate::data::{IdentityUser, USER_DATA_HEADER};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Unauthorized Access")]
    UnauthorizedAccess,
    #[error("Forbidden Access")]
    ForbiddenAccess,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Request body error: {0}")]
    BodyError(gloo_net::Error),
    #[error("Failed to encode {0} header: {1}")]
    HeaderEncodeError(&'static str, serde_json::Error),
    #[error("Request timed out after {0}ms")]
    Timeout(u32),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Merge `other` over `self`; entries in `other` win.
    pub fn merged(&self, other: &ApiHeaders) -> ApiHeaders {
        let mut merged = self.clone();
        for (key, value) in &other.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// Headers for `GET /getUser`: the provider's user object as JSON.
pub fn user_data_headers(identity: &IdentityUser) -> ApiResult<ApiHeaders> {
    let value = identity
        .to_header_value()
        .map_err(|e| ApiError::HeaderEncodeError(USER_DATA_HEADER, e))?;

    let mut headers = ApiHeaders::new();
    headers.insert(USER_DATA_HEADER, value);
    Ok(headers)
}

/// Race `request` against `deadline`. When the deadline fires first the
/// request is dropped and the call fails with [`ApiError::Timeout`].
pub async fn with_timeout<T, R, D>(request: R, deadline: D, timeout_ms: u32) -> ApiResult<T>
where
    R: Future<Output = ApiResult<T>>,
    D: Future<Output = ()>,
{
    pin_mut!(request);
    pin_mut!(deadline);

    match select(request, deadline).await {
        Either::Left((response, _)) => response,
        Either::Right(_) => Err(ApiError::Timeout(timeout_ms)),
    }
}

/// Map a non-2xx status onto an [`ApiError`].
pub fn check_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    match response.status() {
        200..=299 => Ok(response),
        400 => Err(ApiError::BadRequest(format!("Bad request to {endpoint}"))),
        401 => Err(ApiError::UnauthorizedAccess),
        403 => Err(ApiError::ForbiddenAccess),
        404 => Err(ApiError::NotFound(format!("{endpoint} not found"))),
        500..=599 => Err(ApiError::InternalServerError),
        status => Err(ApiError::UnexpectedStatusCode(status)),
    }
}

async fn parse_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(ApiError::ParseError)
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = check_status(response, endpoint)?;
    parse_json_response(validated_response).await
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn make_request(&self, endpoint: &str, headers: &ApiHeaders) -> ApiResult<Response>;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn get_with_headers<T>(&self, endpoint: &str, headers: &ApiHeaders) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;
}

pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        let root_url: String = root_url.into();
        Self {
            root_url: root_url.trim_end_matches('/').to_string(),
            headers: ApiHeaders::new(),
        }
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url, endpoint)
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key, value);
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(&self, endpoint: &str, headers: &ApiHeaders) -> ApiResult<Response> {
        gloo_net::http::Request::get(&self.url(endpoint))
            .headers(self.headers.merged(headers).into())
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.get_with_headers(endpoint, &ApiHeaders::new()).await
    }

    async fn get_with_headers<T>(&self, endpoint: &str, headers: &ApiHeaders) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(endpoint, headers).await?;
        handle_json_response(response, endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use serde_json::json;

    #[test]
    fn user_data_header_carries_provider_json() {
        let raw = json!({ "uid": "fb-7", "displayName": "Grace" });
        let headers = user_data_headers(&IdentityUser::new(raw.clone())).unwrap();

        assert_eq!(
            headers.get(USER_DATA_HEADER),
            Some(serde_json::to_string(&raw).unwrap().as_str())
        );
    }

    #[test]
    fn per_request_headers_override_defaults() {
        let mut defaults = ApiHeaders::new();
        defaults.insert("x-client", "podium");
        defaults.insert("x-user-data", "stale");

        let mut request = ApiHeaders::new();
        request.insert("x-user-data", "{}");

        let merged = defaults.merged(&request);
        assert_eq!(merged.get("x-client"), Some("podium"));
        assert_eq!(merged.get("x-user-data"), Some("{}"));
    }

    #[test]
    fn stalled_request_times_out() {
        let stalled = future::pending::<ApiResult<u32>>();
        let result = block_on(with_timeout(stalled, future::ready(()), 250));

        assert!(matches!(result, Err(ApiError::Timeout(250))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Request timed out after 250ms"
        );
    }

    #[test]
    fn answered_request_beats_the_deadline() {
        let answered = future::ready(Ok::<_, ApiError>(7));
        let result = block_on(with_timeout(answered, future::pending(), 250));

        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn request_errors_pass_through() {
        let failed = future::ready(Err::<u32, _>(ApiError::InternalServerError));
        let result = block_on(with_timeout(failed, future::pending(), 250));

        assert!(matches!(result, Err(ApiError::InternalServerError)));
    }

    #[test]
    fn root_url_is_normalized() {
        let client = HttpApiClient::new("http://localhost:3000/");
        assert_eq!(client.root_url(), "http://localhost:3000");
        assert_eq!(client.url("/"), "http://localhost:3000/");
        assert_eq!(client.url("/getUser"), "http://localhost:3000/getUser");
    }
}
