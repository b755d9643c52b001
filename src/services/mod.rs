//! Upstream timer service module
//!
//! This module contains the payload parser, the poll error types and the
//! HTTP client that fetches timer snapshots from the endpoint.

pub mod error;
pub mod payload;
pub mod endpoint;

// Re-export main types
pub use endpoint::EndpointClient;
pub use error::{ParseError, PollError};
pub use payload::parse_payload;
