//! HTTP request handlers for API endpoints.
//!
//! One handler per logical operation; each runs the same pipeline:
//! validate the inbound envelope, call the provider service, render the
//! result (or let the error envelope do it).

pub mod astronomy;
pub mod health;
pub mod metrics;
pub mod openapi;
pub mod tides;
pub mod version;
pub mod weather;

pub use astronomy::*;
pub use health::*;
pub use metrics::*;
pub use openapi::*;
pub use tides::*;
pub use version::*;
pub use weather::*;
