//! Gateway event handler wiring interactions to the bridge.
//!
//! Serenity delivers each gateway event in its own task, so concurrent
//! invocations are handled independently and never share mutable state.

use log::{error, info, warn};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::application::Interaction;
use serenity::model::gateway::Ready;

use crate::balancer::BalancerRequester;
use crate::commands::{BALANCE_COMMAND, Bridge, InvocationError, extract_invocation};
use crate::discord::reply::ReplyHandle;

/// Event handler for the bot.
///
/// Owns the [Bridge] used to turn `/bilancia` invocations into balancing
/// requests. Everything else arriving from the gateway is ignored.
pub struct Handler {
    /// Bridge between invocations and the balancing service
    bridge: Bridge<BalancerRequester>,
}

impl Handler {
    /// Create a new [Handler].
    ///
    /// # Arguments
    ///
    /// * `requester` - The balancing service client used by the bridge.
    pub fn new(requester: BalancerRequester) -> Self {
        Handler {
            bridge: Bridge::new(requester),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("logged in as {}", ready.user.name);
    }

    /// Handles one incoming interaction.
    ///
    /// Non-command interactions and commands the bot does not own are ignored
    /// silently. Recognized invocations produce exactly one reply, whatever
    /// the outcome of the balancing call.
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let invocation = match extract_invocation(&command.data.name, &command.data.options) {
            Ok(invocation) => invocation,
            Err(InvocationError::UnknownCommand) => return,
            Err(InvocationError::MissingReaction) => {
                warn!(
                    "{} invoked without the required reaction parameter",
                    BALANCE_COMMAND
                );
                return;
            }
        };

        let content = self.bridge.run(&invocation).await;

        let reply = ReplyHandle::new(command);
        if let Err(e) = reply.send(&ctx.http, &content).await {
            error!("failed to send reply: {}", e);
        }
    }
}
