use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::access::{access_time_seconds, format_duration};
use crate::convert::int_to_string;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AccessTimeQuery {
    pub minutes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccessTimeResponse {
    pub seconds: i64,
    pub human: String,
}

#[instrument(skip(state))]
pub async fn access_time(
    State(state): State<AppState>,
    Query(query): Query<AccessTimeQuery>,
) -> Json<AccessTimeResponse> {
    let minutes = query
        .minutes
        .unwrap_or_else(|| int_to_string(state.config.default_access_minutes));
    let seconds = access_time_seconds(&minutes);
    Json(AccessTimeResponse {
        seconds,
        human: format_duration(seconds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn formats_requested_minutes() {
        let state = AppState::fake();
        let Json(body) = access_time(
            State(state),
            Query(AccessTimeQuery {
                minutes: Some("90".into()),
            }),
        )
        .await;
        assert_eq!(body.seconds, 5400);
        assert_eq!(body.human, "1 hours, 30 minutes");
    }

    #[tokio::test]
    async fn falls_back_to_configured_default() {
        let state = AppState::fake();
        let Json(body) = access_time(State(state), Query(AccessTimeQuery { minutes: None })).await;
        assert_eq!(body.seconds, 3600);
        assert_eq!(body.human, "1 hours");
    }

    #[tokio::test]
    async fn unparsable_minutes_default_to_one() {
        let state = AppState::fake();
        let Json(body) = access_time(
            State(state),
            Query(AccessTimeQuery {
                minutes: Some("soon".into()),
            }),
        )
        .await;
        assert_eq!(body.seconds, 60);
        assert_eq!(body.human, "1 minutes");
    }

    #[test]
    fn response_serialization() {
        let body = AccessTimeResponse {
            seconds: 600,
            human: "10 minutes".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("600"));
        assert!(json.contains("10 minutes"));
    }
}
