//! Zone service — owns the zone records served to clients.

use std::sync::atomic::{AtomicI64, Ordering};

use growzone_domain::setpoint::SetpointConfig;
use growzone_domain::soil::SoilMoistureReading;
use growzone_domain::time::unix_seconds;
use growzone_domain::zone::{ZonePayload, ZoneReading};

use crate::ports::{Clock, ZoneSource};

/// Holds the zone payload, soil moisture and setpoints for the process
/// lifetime.
///
/// The only mutable value is the reading timestamp. Every call to
/// [`current_reading`](Self::current_reading) overwrites it with the clock's
/// time; concurrent callers all write "now", so the last writer wins and no
/// lock is taken.
pub struct ZoneService<C> {
    clock: C,
    timestamp: AtomicI64,
    payload: ZonePayload,
    soil_moisture: SoilMoistureReading,
    setpoints: SetpointConfig,
}

impl<C: Clock> ZoneService<C> {
    /// Snapshot every record from `source`. The initial timestamp is the
    /// clock's current time.
    pub fn new<S: ZoneSource>(source: &S, clock: C) -> Self {
        let timestamp = unix_seconds(clock.now());
        Self {
            clock,
            timestamp: AtomicI64::new(timestamp),
            payload: source.payload(),
            soil_moisture: source.soil_moisture(),
            setpoints: source.setpoints(),
        }
    }

    /// Restamp the zone reading with the current time and return it.
    pub fn current_reading(&self) -> ZoneReading {
        let timestamp = unix_seconds(self.clock.now());
        self.timestamp.store(timestamp, Ordering::Relaxed);
        tracing::debug!(timestamp, "zone reading restamped");
        ZoneReading::new(timestamp, self.payload)
    }

    /// Timestamp stored by the most recent read, or the startup time.
    #[must_use]
    pub fn last_timestamp(&self) -> i64 {
        self.timestamp.load(Ordering::Relaxed)
    }

    /// Moisture of every soil probe.
    #[must_use]
    pub fn soil_moisture(&self) -> &SoilMoistureReading {
        &self.soil_moisture
    }

    /// Regulation thresholds.
    #[must_use]
    pub fn setpoints(&self) -> &SetpointConfig {
        &self.setpoints
    }
}
