//! JSON handler for the zone reading.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use growzone_app::ports::Clock;
use growzone_domain::zone::ZoneReading;

use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ZoneReading>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /data`
///
/// Restamps the shared reading with the current time before returning it.
pub async fn get<C>(State(state): State<AppState<C>>) -> GetResponse
where
    C: Clock + Send + Sync + 'static,
{
    GetResponse::Ok(Json(state.zone_service.current_reading()))
}
