//! Single-shot reply capability for command interactions.
//!
//! Discord accepts exactly one initial response per interaction. The
//! [`ReplyHandle`] models this constraint as a consumable capability: sending
//! takes the handle by value, so a second reply on the same invocation is a
//! compile error instead of a silent runtime bug.

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::http::Http;
use serenity::model::application::CommandInteraction;

/// One-time-use capability to reply to a command interaction.
pub struct ReplyHandle {
    /// The interaction the reply belongs to
    interaction: CommandInteraction,
}

impl ReplyHandle {
    /// Create a new [ReplyHandle] for an interaction.
    pub fn new(interaction: CommandInteraction) -> Self {
        ReplyHandle { interaction }
    }

    /// Sends the reply, consuming the handle.
    ///
    /// # Arguments
    ///
    /// * `http` - Discord HTTP client used to deliver the response.
    /// * `content` - Plain text content of the reply.
    ///
    /// # Errors
    ///
    /// Returns the serenity error when the response cannot be delivered, for
    /// example when the connection to Discord dropped. The invocation is then
    /// abandoned; no retry is attempted.
    pub async fn send(self, http: &Http, content: &str) -> serenity::Result<()> {
        let message = CreateInteractionResponseMessage::new().content(content);

        self.interaction
            .create_response(http, CreateInteractionResponse::Message(message))
            .await
    }
}
