//! # growzone-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `Clock` — source of the current time
//!   - `ZoneSource` — provider of a zone's payload, soil moisture and setpoints
//! - Define the `ZoneService` use-case that owns the zone records for the
//!   process lifetime and restamps the zone reading on every read
//!
//! ## Dependency rule
//! Depends on `growzone-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
