//! JSON handler for setpoints.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use growzone_app::ports::Clock;
use growzone_domain::setpoint::SetpointConfig;

use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<SetpointConfig>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /data/1/setpoints`
pub async fn get<C>(State(state): State<AppState<C>>) -> GetResponse
where
    C: Clock + Send + Sync + 'static,
{
    GetResponse::Ok(Json(*state.zone_service.setpoints()))
}
