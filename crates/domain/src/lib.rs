//! # growzone-domain
//!
//! Pure domain model for the growzone monitoring mock.
//!
//! ## Responsibilities
//! - Foundational types: zone identifier, timestamps
//! - Define the **zone reading** (telemetry + actuator status of one grow room)
//! - Define the **soil moisture reading** (one value per fixed-position probe)
//! - Define the **setpoints** a controller would regulate against
//! - Own the JSON shape of each record through `serde`
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod id;
pub mod time;

pub mod setpoint;
pub mod soil;
pub mod zone;
