//! Reply text formatters for the `bilancia` command.
//!
//! This module provides functions to format the replies sent back to Discord.
//! The user-facing text is in Italian, matching the command surface of the bot.

/// Formats a successful balancing reply.
///
/// The reply has three parts: the original equation quoted as a literal code
/// block, the balancing trace returned by the service, and the balanced
/// equation quoted as a literal code block.
///
/// # Arguments
///
/// * `original` - The equation text as submitted by the user
/// * `log` - The balancing trace returned by the service
/// * `balanced` - The balanced equation returned by the service
///
/// # Examples
///
/// ```
/// # use bilancia::commands::response::format_balanced;
/// let reply = format_balanced("H2 + O2 -> H2O", "balanced in 3 steps", "2H2 + O2 -> 2H2O");
/// assert!(reply.contains("balanced in 3 steps"));
/// ```
pub fn format_balanced(original: &str, log: &str, balanced: &str) -> String {
    format!("Reazione iniziale: ```{original}```\n{log}\n```{balanced}```")
}

/// Formats the generic failure reply used when the balancing service cannot
/// be reached or returns an unusable response.
pub fn format_service_unavailable() -> String {
    "Servizio di bilanciamento non disponibile, riprova più tardi.".to_owned()
}

/// Formats the generic failure reply used when the service reports a failed
/// balancing without any explanation text.
pub fn format_failure() -> String {
    "Operazione fallita.".to_owned()
}

/// Formats the fallback reply for a success response without a balanced
/// equation.
///
/// The service contract leaves this case undefined, so the bot answers with a
/// success-without-detail message instead of an empty reply.
pub fn format_missing_result() -> String {
    "La reazione è stata bilanciata ma il servizio non ha restituito il risultato.".to_owned()
}
