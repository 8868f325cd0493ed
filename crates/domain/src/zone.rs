//! Zone reading — climate telemetry and actuator status of one grow room.

use serde::{Deserialize, Serialize};

/// On/off status of an actuator, carried as `0` / `1` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Switch {
    Off,
    On,
}

impl From<u8> for Switch {
    fn from(value: u8) -> Self {
        if value == 0 { Self::Off } else { Self::On }
    }
}

impl From<Switch> for u8 {
    fn from(value: Switch) -> Self {
        match value {
            Switch::Off => 0,
            Switch::On => 1,
        }
    }
}

/// Flat snapshot of every sensor and actuator in a zone.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZonePayload {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Illuminance in lux.
    pub lux: f64,
    /// Acidity of the nutrient solution, pH units.
    pub ph: f64,
    /// Electrical conductivity of the nutrient solution.
    pub ec: f64,
    /// Reservoir level indicator.
    pub water_level: u8,
    pub fan_status: Switch,
    pub light_status: Switch,
    pub curtain_status: Switch,
    pub valve_status: Switch,
    pub water_pump_status: Switch,
    pub fogger_status: Switch,
    /// Secondary probe temperature in °C.
    pub tp4_temperature: f64,
    /// EC of nutrient stock A.
    pub ec_a: f64,
    /// EC of nutrient stock B.
    pub ec_b: f64,
    /// Macro-nutrient dosing pump.
    pub macro_status: Switch,
    /// Micro-nutrient dosing pump.
    pub micro_status: Switch,
}

/// A zone payload stamped with the unix time it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneReading {
    /// Seconds since the unix epoch.
    pub timestamp: i64,
    pub payload: ZonePayload,
}

impl ZoneReading {
    /// Stamp `payload` with `timestamp`.
    #[must_use]
    pub fn new(timestamp: i64, payload: ZonePayload) -> Self {
        Self { timestamp, payload }
    }
}
