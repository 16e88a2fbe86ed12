//! Interaction bridge between slash command invocations and the balancing service.
//!
//! This module translates one inbound `/bilancia` invocation into one outbound
//! balancing request and exactly one reply text. It interacts with the
//! balancing service through a [Requester] implementation, which keeps the
//! bridge logic testable with mocks.

use log::{debug, info};
use serenity::model::application::{CommandDataOption, CommandDataOptionValue};

use crate::balancer::{BalanceResult, BalancerError, Requester};
use crate::commands::response::{
    format_balanced, format_failure, format_missing_result, format_service_unavailable,
};
use crate::commands::{
    BALANCE_COMMAND, Invocation, InvocationError, LOG_PARAMETER, REACTION_PARAMETER,
};

/// Extracts an [Invocation] from the interaction data.
///
/// Only `bilancia` invocations are accepted; anything else is reported as
/// [`InvocationError::UnknownCommand`] so the caller can ignore it silently.
/// The `log` flag defaults to `true` when absent.
///
/// # Arguments
///
/// * `command_name` - The name of the invoked command.
/// * `options` - The typed arguments carried by the interaction.
pub fn extract_invocation(
    command_name: &str,
    options: &[CommandDataOption],
) -> Result<Invocation, InvocationError> {
    if command_name != BALANCE_COMMAND {
        return Err(InvocationError::UnknownCommand);
    }

    let mut reaction = None;
    let mut log = None;
    for option in options {
        match (option.name.as_str(), &option.value) {
            (REACTION_PARAMETER, CommandDataOptionValue::String(value)) => {
                reaction = Some(value.clone());
            }
            (LOG_PARAMETER, CommandDataOptionValue::Boolean(value)) => {
                log = Some(*value);
            }
            _ => {}
        }
    }

    let reaction = reaction.ok_or(InvocationError::MissingReaction)?;

    Ok(Invocation {
        reaction,
        log: log.unwrap_or(true),
    })
}

/// Bridge between command invocations and the balancing service.
///
/// Holds the requester used to reach the service. Stateless across
/// invocations: every call to [`Bridge::run`] is independent.
///
/// # Examples
///
/// ```no_run
/// use bilancia::balancer::BalancerRequester;
/// use bilancia::commands::{Bridge, Invocation};
///
/// # #[tokio::main]
/// # async fn main() {
/// let requester = BalancerRequester::new("http://127.0.0.1:8000", 5).unwrap();
/// let bridge = Bridge::new(requester);
/// let invocation = Invocation { reaction: "H2 + O2 -> H2O".to_string(), log: true };
/// let reply = bridge.run(&invocation).await;
/// # }
/// ```
pub struct Bridge<R: Requester> {
    /// Requester to interact with the balancing service
    requester: R,
}

impl<R: Requester> Bridge<R> {
    /// Create a new [Bridge].
    ///
    /// # Arguments
    ///
    /// * `requester` - An implementation of the [Requester] trait to interact
    ///   with the balancing service.
    pub fn new(requester: R) -> Self {
        Bridge { requester }
    }

    /// Runs one invocation against the balancing service and returns the
    /// reply text.
    ///
    /// This method always produces a reply:
    /// - service unreachable or undecodable response: generic failure text
    /// - `ok=false`: the service log text verbatim
    /// - `ok=true` with a balanced equation: the three-part reply (original
    ///   equation, trace, balanced equation)
    /// - `ok=true` without a balanced equation: success-without-detail text
    pub async fn run(&self, invocation: &Invocation) -> String {
        info!("handling balance invocation");
        // The trace is always included in the reply, whatever the flag says
        debug!("log flag set to {}", invocation.log);

        match self.requester.balance_reaction(&invocation.reaction).await {
            Ok(result) => Self::reply_for_result(&invocation.reaction, &result),
            Err(BalancerError::ServiceUnavailable) => format_service_unavailable(),
        }
    }

    /// Builds the reply text for a decoded service response.
    fn reply_for_result(original: &str, result: &BalanceResult) -> String {
        if !result.ok {
            return match &result.log {
                Some(log) => log.clone(),
                None => format_failure(),
            };
        }

        match &result.reaction {
            Some(balanced) => {
                format_balanced(original, result.log.as_deref().unwrap_or_default(), balanced)
            }
            None => format_missing_result(),
        }
    }
}
