//! Shared egress probe domain primitives.
//!
//! This crate owns the probe contract (target, alert content, invocation
//! response) and configuration resolution. It intentionally excludes sockets,
//! AWS SDK and Lambda runtime concerns.

pub mod config;
pub mod contract;
pub mod error;
