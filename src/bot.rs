//! Bot assembly and gateway lifecycle.
//!
//! This module provides the [`Bot`] struct that wires the balancing service
//! client into a serenity gateway client. Command registration is not part of
//! the bot lifecycle: it runs once, independently, before the gateway starts
//! (see [`crate::discord::register_commands`]).

use log::info;
use serenity::Client;
use serenity::model::gateway::GatewayIntents;

use crate::balancer::BalancerRequester;
use crate::config::Config;
use crate::discord::Handler;

/// Main bot structure owning the Discord gateway client.
///
/// The bot has no state of its own beyond the client: every command
/// invocation is handled independently by the event handler, and nothing is
/// persisted between invocations.
///
/// # Examples
///
/// ```no_run
/// # use bilancia::bot::Bot;
/// # use bilancia::config::Config;
/// # async fn example() -> Result<(), anyhow::Error> {
/// let config = Config::load("config.yaml")?;
/// let bot = Bot::new(config).await?;
/// bot.start().await?; // Runs until process termination
/// # Ok(())
/// # }
/// ```
pub struct Bot {
    /// Serenity gateway client
    client: Client,
}

impl Bot {
    /// Creates a new Bot instance from the loaded configuration.
    ///
    /// Builds the balancing service client and the serenity gateway client
    /// with the `GUILDS` intent, which is all slash command handling needs.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the gateway client cannot be
    /// built.
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        let requester = BalancerRequester::new(&config.balancer.url, config.balancer.timeout)?;

        let client = Client::builder(&config.discord.token, GatewayIntents::GUILDS)
            .event_handler(Handler::new(requester))
            .await?;

        Ok(Bot { client })
    }

    /// Starts the gateway connection and processes events until the process
    /// is terminated.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway connection cannot be established, for
    /// example with an invalid token.
    pub async fn start(mut self) -> Result<(), anyhow::Error> {
        info!("connecting to the discord gateway");
        self.client.start().await?;

        Ok(())
    }
}
