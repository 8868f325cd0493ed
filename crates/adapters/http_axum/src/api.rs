//! JSON API handler modules.

pub mod readings;
pub mod setpoints;
pub mod soil_moisture;

use axum::Router;
use axum::routing::get;

use growzone_app::ports::Clock;
use growzone_domain::id::ZoneId;

use crate::state::AppState;

/// Build the data sub-router for the served zone.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: Clock + Send + Sync + 'static,
{
    let zone = ZoneId::DEFAULT;
    Router::new()
        .route("/data", get(readings::get::<C>))
        .route(&format!("/data/{zone}/sm"), get(soil_moisture::get::<C>))
        .route(&format!("/data/{zone}/setpoints"), get(setpoints::get::<C>))
}
