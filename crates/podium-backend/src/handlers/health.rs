use std::sync::Arc;

use axum::{Json, extract::State};
use podium::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use podium::log;

use crate::services::UserService;

fn human_readable_uptime(uptime_seconds: i64) -> String {
    let days = uptime_seconds / 86400;
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(started_at: chrono::DateTime<chrono::Utc>) -> UptimeInfo {
    let seconds = (chrono::Utc::now() - started_at).num_seconds();
    UptimeInfo {
        seconds,
        human: human_readable_uptime(seconds),
    }
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: service_uptime(state.started_at),
        services: ServiceInfo {
            users: "up".to_string(),
            known_users: state.users.count().await,
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formats_largest_unit_first() {
        assert_eq!(human_readable_uptime(42), "42s");
        assert_eq!(human_readable_uptime(125), "2m 5s");
        assert_eq!(human_readable_uptime(3 * 3600 + 7), "3h 0m 7s");
        assert_eq!(human_readable_uptime(2 * 86400 + 3661), "2d 1h 1m 1s");
    }
}
