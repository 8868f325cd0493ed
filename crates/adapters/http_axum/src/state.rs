//! Shared application state for axum handlers.

use std::sync::Arc;

use growzone_app::ports::Clock;
use growzone_app::services::zone_service::ZoneService;

/// Application state shared across all axum handlers.
///
/// Generic over the clock to avoid dynamic dispatch. `Clone` is implemented
/// manually so the clock itself does not need to be `Clone` — only the `Arc`
/// wrapper is cloned.
pub struct AppState<C> {
    /// Zone records service.
    pub zone_service: Arc<ZoneService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            zone_service: Arc::clone(&self.zone_service),
        }
    }
}

impl<C> AppState<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(zone_service: ZoneService<C>) -> Self {
        Self {
            zone_service: Arc::new(zone_service),
        }
    }
}
