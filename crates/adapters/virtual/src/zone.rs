//! Virtual grow room with fixed readings.

use growzone_app::ports::ZoneSource;
use growzone_domain::setpoint::SetpointConfig;
use growzone_domain::soil::SoilMoistureReading;
use growzone_domain::zone::{Switch, ZonePayload};

const PAYLOAD: ZonePayload = ZonePayload {
    temperature: 16.9,
    humidity: 33.4,
    lux: 6551.6,
    ph: 24.0,
    ec: 0.1,
    water_level: 1,
    fan_status: Switch::On,
    light_status: Switch::On,
    curtain_status: Switch::On,
    valve_status: Switch::Off,
    water_pump_status: Switch::Off,
    fogger_status: Switch::On,
    tp4_temperature: 18.2,
    ec_a: 0.4,
    ec_b: 0.6,
    macro_status: Switch::On,
    micro_status: Switch::Off,
};

const SOIL_MOISTURE: [u8; 4] = [45, 47, 44, 46];

const SETPOINTS: SetpointConfig = SetpointConfig {
    lux_min: 3000,
    lux_max: 7000,
    ec_target: 1.5,
};

/// A simulated zone.
///
/// Readings never change, so a server backed by it answers identically
/// apart from the reading timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualZone;

impl ZoneSource for VirtualZone {
    fn payload(&self) -> ZonePayload {
        PAYLOAD
    }

    fn soil_moisture(&self) -> SoilMoistureReading {
        SoilMoistureReading::new(SOIL_MOISTURE.to_vec())
    }

    fn setpoints(&self) -> SetpointConfig {
        SETPOINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_expose_fixed_payload() {
        let value = serde_json::to_value(VirtualZone.payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "temperature": 16.9,
                "humidity": 33.4,
                "lux": 6551.6,
                "ph": 24.0,
                "ec": 0.1,
                "water_level": 1,
                "fan_status": 1,
                "light_status": 1,
                "curtain_status": 1,
                "valve_status": 0,
                "water_pump_status": 0,
                "fogger_status": 1,
                "tp4_temperature": 18.2,
                "ec_a": 0.4,
                "ec_b": 0.6,
                "macro_status": 1,
                "micro_status": 0
            })
        );
    }

    #[test]
    fn should_expose_four_soil_probes() {
        let reading = VirtualZone.soil_moisture();
        assert_eq!(reading.sensor_count(), 4);
        assert_eq!(reading.get(1), Some(45));
        assert_eq!(reading.get(4), Some(46));
    }

    #[test]
    fn should_expose_fixed_setpoints() {
        let json = serde_json::to_string(&VirtualZone.setpoints()).unwrap();
        assert_eq!(
            json,
            r#"{"LUX-MINsetpoint":3000,"LUX-MAXsetpoint":7000,"EC-setpoint":1.5}"#
        );
    }

    #[test]
    fn should_keep_lux_window_ordered() {
        let setpoints = VirtualZone.setpoints();
        assert!(setpoints.lux_min < setpoints.lux_max);
    }
}
