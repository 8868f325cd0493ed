//! Zone source port — provides the records of the served zone.
//!
//! A source is read once when the service is built. Whatever it returns is
//! held for the process lifetime.

use growzone_domain::setpoint::SetpointConfig;
use growzone_domain::soil::SoilMoistureReading;
use growzone_domain::zone::ZonePayload;

/// Provides the sensor payload, soil moisture and setpoints of a zone.
pub trait ZoneSource {
    /// Climate telemetry and actuator status.
    fn payload(&self) -> ZonePayload;

    /// Moisture of every soil probe.
    fn soil_moisture(&self) -> SoilMoistureReading;

    /// Regulation thresholds.
    fn setpoints(&self) -> SetpointConfig;
}

impl<T: ZoneSource + ?Sized> ZoneSource for std::sync::Arc<T> {
    fn payload(&self) -> ZonePayload {
        (**self).payload()
    }

    fn soil_moisture(&self) -> SoilMoistureReading {
        (**self).soil_moisture()
    }

    fn setpoints(&self) -> SetpointConfig {
        (**self).setpoints()
    }
}
