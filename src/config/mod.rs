//! Configuration structures and loading utilities.
//!
//! This module contains all configuration structures used by the application,
//! including environment variable loading and default values.

pub mod http_client;
pub mod metrics;
pub mod providers;

pub use http_client::*;
pub use metrics::*;
pub use providers::*;
