//! Data models and schemas for the Shorecast API.
//!
//! This module contains the request/response models used throughout the
//! application, including the inbound envelope validation.

pub mod api;
pub mod query;
pub mod weather;

pub use api::*;
pub use query::*;
pub use weather::*;
