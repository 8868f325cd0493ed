//! Soil moisture — one reading per fixed-position probe.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Moisture values of every soil probe in a zone.
///
/// Probes are addressed from `1` to [`sensor_count`](Self::sensor_count).
/// The count is derived from the readings so it can never disagree with
/// the payload.
///
/// Serialized as:
///
/// ```json
/// {"no_of_soil_sensors": 2, "payload": {"soil_moisture_1": 45, "soil_moisture_2": 47}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoilMoistureReading {
    readings: Vec<u8>,
}

impl SoilMoistureReading {
    /// Build a reading from probe values ordered by probe index.
    #[must_use]
    pub fn new(readings: Vec<u8>) -> Self {
        Self { readings }
    }

    /// Number of probes.
    #[must_use]
    pub fn sensor_count(&self) -> usize {
        self.readings.len()
    }

    /// Moisture of probe `index` (1-based).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        index
            .checked_sub(1)
            .and_then(|i| self.readings.get(i))
            .copied()
    }

    /// Iterate `(index, moisture)` pairs, 1-based.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.readings.iter().enumerate().map(|(i, v)| (i + 1, *v))
    }
}

impl Serialize for SoilMoistureReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("SoilMoistureReading", 2)?;
        record.serialize_field("no_of_soil_sensors", &self.sensor_count())?;
        record.serialize_field("payload", &Probes(self))?;
        record.end()
    }
}

struct Probes<'a>(&'a SoilMoistureReading);

impl Serialize for Probes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.sensor_count()))?;
        for (index, moisture) in self.0.iter() {
            map.serialize_entry(&format!("soil_moisture_{index}"), &moisture)?;
        }
        map.end()
    }
}
