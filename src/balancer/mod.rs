//! Balancing service integration and API client.
//!
//! This module provides the HTTP client side of the external
//! chemical-equation balancing service. The service is opaque to the bot: it
//! receives an equation as a query parameter and answers with a json object
//! describing the outcome.
//!
//! # Modules
//!
//! - `requester` - HTTP client for making requests to the balancing service
//! - `response_structs` - Data structures for the service responses

mod requester;
mod response_structs;

pub use crate::balancer::requester::{BalancerRequester, Requester};
pub use crate::balancer::response_structs::BalanceResult;
#[cfg(test)]
pub use crate::balancer::requester::MockRequester;

/// Errors that can occur while calling the balancing service.
///
/// # Variants
///
/// * `ServiceUnavailable` - The service could not be reached, timed out, or
///   returned a body that is not valid json. The underlying transport error
///   is logged where it occurs.
#[derive(Debug, PartialEq)]
pub enum BalancerError {
    /// The balancing service did not produce a usable response.
    ServiceUnavailable,
}
