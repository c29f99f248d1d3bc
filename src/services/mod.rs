//! Business logic and service layer modules.
//!
//! This module contains the core of the gateway: the per-provider adapters,
//! the shared upstream HTTP client, error taxonomy and metrics collection.

pub mod astronomy;
pub mod error;
pub mod http_client;
pub mod metrics;
pub mod tides;
pub mod weather;

pub use astronomy::*;
pub use error::*;
pub use http_client::*;
pub use metrics::*;
pub use tides::*;
pub use weather::*;
