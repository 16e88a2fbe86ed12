//! Discord platform integration for the bot.
//!
//! This module contains everything that touches the Discord API:
//! - **Registration**: declaring the command surface once at startup via the
//!   registrar submodule
//! - **Events**: receiving command interactions from the gateway via the
//!   handler submodule
//! - **Replies**: the single-shot reply capability via the reply submodule
//!
//! Login and session management are owned by the serenity client; this module
//! only consumes its HTTP and gateway surfaces.

mod handler;
mod registrar;
mod reply;

pub use crate::discord::handler::Handler;
pub use crate::discord::registrar::{
    CommandSpec, ParameterKind, ParameterSpec, RegistrationError, bilancia_command,
    register_commands,
};
pub use crate::discord::reply::ReplyHandle;
