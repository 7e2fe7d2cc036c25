use axum::Json;
use podium::data::ProbeResponse;

/// Handle `GET /`, the frontend's liveness probe.
pub async fn get() -> Json<ProbeResponse> {
    Json(ProbeResponse::connected())
}
