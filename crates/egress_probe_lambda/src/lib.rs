//! AWS-oriented adapters and handlers for the egress reachability probe.
//!
//! This crate owns runtime integration details (the TCP connector, the alert
//! publisher seam and the Lambda handler). Probe constants, configuration and
//! error types come from `egress_probe_core`.

pub mod adapters;
pub mod handlers;
