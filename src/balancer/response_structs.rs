//! Response structures for the balancing service API.
//!
//! This module contains the structure for deserializing the JSON response
//! returned by the external chemical-equation balancing service.

use serde::Deserialize;
use std::fmt;

/// Response from `POST /balance_reaction?reaction={reaction}`.
///
/// The service always returns all three fields; `reaction` is `null` when the
/// balancing failed and `log` carries the human-readable explanation in both
/// cases (failure reason on error, balancing trace on success).
#[derive(Deserialize, Debug, Clone)]
pub struct BalanceResult {
    /// Whether the balancing succeeded.
    pub ok: bool,
    /// The balanced equation text, present when `ok` is true.
    pub reaction: Option<String>,
    /// Human-readable trace or failure explanation.
    pub log: Option<String>,
}

impl fmt::Display for BalanceResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ok={}, reaction={:?}, log={:?}",
            self.ok, self.reaction, self.log
        )
    }
}
