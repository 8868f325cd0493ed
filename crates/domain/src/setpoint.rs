//! Setpoints — the thresholds a zone controller regulates against.

use serde::{Deserialize, Serialize};

/// Lux window and nutrient target for a zone.
///
/// `lux_min < lux_max` is expected of every instance but not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetpointConfig {
    /// Lower bound of the lighting window, in lux.
    #[serde(rename = "LUX-MINsetpoint")]
    pub lux_min: u32,
    /// Upper bound of the lighting window, in lux.
    #[serde(rename = "LUX-MAXsetpoint")]
    pub lux_max: u32,
    /// Target electrical conductivity of the nutrient solution.
    #[serde(rename = "EC-setpoint")]
    pub ec_target: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_with_wire_names() {
        let setpoints = SetpointConfig {
            lux_min: 1000,
            lux_max: 2000,
            ec_target: 2.25,
        };
        let json = serde_json::to_string(&setpoints).unwrap();
        assert_eq!(
            json,
            r#"{"LUX-MINsetpoint":1000,"LUX-MAXsetpoint":2000,"EC-setpoint":2.25}"#
        );
    }

    #[test]
    fn should_parse_wire_names() {
        let setpoints: SetpointConfig = serde_json::from_str(
            r#"{"LUX-MINsetpoint": 10, "LUX-MAXsetpoint": 20, "EC-setpoint": 0.5}"#,
        )
        .unwrap();
        assert_eq!(setpoints.lux_min, 10);
        assert_eq!(setpoints.lux_max, 20);
        assert!((setpoints.ec_target - 0.5).abs() < f64::EPSILON);
    }
}
