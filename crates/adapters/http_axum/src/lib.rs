//! # growzone-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the zone records as JSON:
//!   - `GET /data` — zone reading, restamped on every request
//!   - `GET /data/1/sm` — soil moisture
//!   - `GET /data/1/setpoints` — setpoints
//! - Allow cross-origin requests from any origin
//! - Log every request/response through `tracing`
//!
//! Unknown paths fall through to axum's default `404`.
//!
//! ## Dependency rule
//! Depends on `growzone-app` (for port traits and services) and
//! `growzone-domain` (for the serialized records). Never leaks axum types
//! into the domain.

pub mod api;
pub mod router;
pub mod state;
