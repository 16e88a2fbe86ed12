//! Command invocation handling for the bot.
//!
//! This module provides the bridge between an incoming `/bilancia` slash
//! command invocation and the external balancing service:
//!
//! 1. **Extraction** - Reading the typed arguments out of the interaction data
//! 2. **Calling** - Issuing one balancing request to the external service
//! 3. **Formatting** - Turning the service response into exactly one reply text
//!
//! # Flow
//!
//! ```text
//! Interaction data → extract_invocation() → Invocation → Bridge::run() → reply text
//! ```
//!
//! Invocations are fully independent: there is no shared mutable state and no
//! ordering guarantee across concurrently handled invocations.

mod bridge;
pub mod response;

pub use crate::commands::bridge::{Bridge, extract_invocation};

/// Name of the only command exposed by the bot.
pub const BALANCE_COMMAND: &str = "bilancia";

/// Name of the required equation parameter of the `bilancia` command.
pub const REACTION_PARAMETER: &str = "reazione";

/// Name of the optional log flag parameter of the `bilancia` command.
pub const LOG_PARAMETER: &str = "log";

/// One parsed command invocation.
///
/// Ephemeral, one per incoming interaction; discarded once the reply has been
/// sent.
#[derive(Debug, PartialEq)]
pub struct Invocation {
    /// The raw equation text submitted by the user.
    pub reaction: String,
    /// The log flag, defaulted to `true` when the user omits it.
    ///
    /// The original bot always includes the balancing trace in the reply no
    /// matter what the user passed, and this behavior is kept as-is.
    pub log: bool,
}

/// Errors that can occur while extracting an invocation.
///
/// Neither variant is user-visible: extraction failures never produce a reply.
///
/// # Variants
///
/// * `UnknownCommand` - The interaction is for a command this bot does not
///   own. Handled as a silent ignore.
///
/// * `MissingReaction` - The required equation parameter is absent. The
///   platform guarantees required parameters, so this indicates a broken
///   registration; it is logged and the invocation is dropped.
#[derive(Debug, PartialEq)]
pub enum InvocationError {
    /// The command name is not `bilancia` (silent ignore).
    UnknownCommand,
    /// The required equation parameter is missing.
    MissingReaction,
}
