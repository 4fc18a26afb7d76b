//! Shared building blocks for `probehost`.
//!
//! * [`config`]: process-wide configuration, set once at startup.
//! * [`network`]: IP classification and the `host[_port]` target token model.

pub mod config;
pub mod network;
