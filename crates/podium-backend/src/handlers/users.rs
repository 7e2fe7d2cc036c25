use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use podium::data::{GetUserResponse, IdentityUser, USER_DATA_HEADER};
use podium::log;

use crate::services::UserService;

fn identity_from_headers(headers: &HeaderMap) -> Result<IdentityUser, &'static str> {
    let raw = headers
        .get(USER_DATA_HEADER)
        .ok_or("Missing x-user-data header")?
        .to_str()
        .map_err(|_| "x-user-data header is not valid text")?;

    IdentityUser::from_json(raw).map_err(|_| "x-user-data header is not valid JSON")
}

/// Handle `GET /getUser`: resolve the provider identity in `x-user-data` to
/// the application user.
pub async fn get(
    State(state): State<Arc<crate::AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let identity = match identity_from_headers(&headers) {
        Ok(identity) => identity,
        Err(reason) => {
            log::warn!("Rejected getUser: {reason}");
            return (StatusCode::BAD_REQUEST, reason).into_response();
        }
    };

    match state.users.resolve(&identity).await {
        Ok(user) => {
            log::info!("Resolved user {}", user.uid);
            (StatusCode::OK, Json(GetUserResponse { user })).into_response()
        }
        Err(err) => {
            log::warn!("Failed to resolve user: {err}");
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
    }
}
