//! # growzone-adapter-virtual
//!
//! Simulated zone for testing and demonstration purposes. Every value is a
//! literal constant; nothing is sampled from hardware.
//!
//! ## Provided records
//!
//! | Record | Values |
//! |--------|--------|
//! | Zone payload | 17 climate, nutrient and actuator fields |
//! | Soil moisture | 4 probes: 45, 47, 44, 46 |
//! | Setpoints | lux 3000–7000, EC 1.5 |
//!
//! ## Dependency rule
//!
//! Depends on `growzone-app` (port traits) and `growzone-domain` only.

mod zone;

pub use zone::VirtualZone;
