//! Bilancia - A Discord bot for balancing chemical equations.
//!
//! This is the main entry point for the bilancia bot, which bridges Discord
//! slash commands with an external chemical-equation balancing service.
//!
//! # Overview
//!
//! Users submit an equation with the `/bilancia` command. The bot forwards it
//! to the balancing service over HTTP and posts the balanced result (or the
//! failure explanation) back into the channel. All the chemistry lives in the
//! external service; the bot is only the request/response bridge.
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! discord:
//!   application_id: "1234567890"
//!   token: "bot-token"
//!
//! balancer:
//!   url: "http://127.0.0.1:8000"
//!   timeout: 5
//! ```
//!
//! Any value can be overridden with a `BILANCIA_` prefixed environment
//! variable, for example `BILANCIA_DISCORD__TOKEN`.
//!
//! # Usage
//!
//! ```bash
//! bilancia --config config.yaml
//! ```
//!
//! # Bot Commands
//!
//! - `/bilancia reazione:<equation> [log:<bool>]` - Balance a chemical equation
//!
//! # Architecture
//!
//! - [`balancer`] - HTTP client for the external balancing service
//! - [`bot`] - Gateway client assembly and lifecycle
//! - [`commands`] - Invocation extraction, bridge logic and reply formatting
//! - [`config`] - YAML configuration loading with environment variable support
//! - [`discord`] - Command registration, event handling and the reply capability
//!
//! # Runtime Behavior
//!
//! At startup the bot registers its command set with Discord exactly once; a
//! registration failure is logged and the bot keeps running with whatever
//! commands a previous run registered. It then connects to the gateway and
//! handles each command invocation in its own task.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config, discord::bilancia_command};

mod balancer;
mod bot;
mod commands;
mod config;
mod discord;

/// Command-line arguments for the bilancia bot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// The configuration file contains the Discord credentials and the
    /// balancing service settings. See the [`config`] module for the expected
    /// format.
    #[arg(short, long)]
    config: String,
}

/// Main entry point for the bilancia bot.
///
/// Initialization steps:
///
/// 1. **Logging Setup**: `info` level by default, `RUST_LOG` override
/// 2. **Argument Parsing**: command-line arguments via `clap`
/// 3. **Configuration Loading**: YAML file with environment overrides
/// 4. **Command Registration**: one global command overwrite against the
///    Discord REST API; failure is logged and does not stop the bot
/// 5. **Bot Execution**: gateway connection and event processing
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting bilancia {}...", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from YAML file with environment variable overrides
    let mut config: Config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Normalize balancer URL by removing trailing slash if present
    if config.balancer.url.ends_with('/') {
        config.balancer.url.pop();
    }

    // Register the command set once, before accepting invocations. A failure
    // leaves the previously registered commands routable.
    if let Err(e) = discord::register_commands(
        &config.discord.application_id,
        &config.discord.token,
        &[bilancia_command()],
    )
    .await
    {
        error!("Failed to register application commands: {}", e);
    }

    // Launch bot
    let bot = match Bot::new(config).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };

    if let Err(e) = bot.start().await {
        error!("Bot stopped with error: {}", e);
    }
}
