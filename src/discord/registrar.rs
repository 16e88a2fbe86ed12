//! Application command registration with the Discord REST API.
//!
//! This module declares the command surface of the bot and synchronizes it
//! with Discord once at process start. The registration call fully replaces
//! the stored command set for the application, so repeating it with the same
//! specs is idempotent (last write wins).

use std::collections::HashSet;
use std::fmt;

use log::info;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::http::Http;
use serenity::model::application::{Command, CommandOptionType};
use serenity::model::id::ApplicationId;

use crate::commands::{BALANCE_COMMAND, LOG_PARAMETER, REACTION_PARAMETER};

/// Immutable descriptor of one application command.
///
/// Created once at startup and sent verbatim to Discord.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Command name as typed by users after the slash.
    pub name: String,
    /// Short description shown by the Discord client.
    pub description: String,
    /// Ordered sequence of command parameters.
    pub parameters: Vec<ParameterSpec>,
}

/// Descriptor of one typed command parameter.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Short description shown by the Discord client.
    pub description: String,
    /// Parameter value type.
    pub kind: ParameterKind,
    /// Whether the platform requires the parameter to be filled.
    pub required: bool,
}

/// Value type of a command parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterKind {
    /// Free text, wire option type 3.
    Text,
    /// Boolean flag, wire option type 5.
    Boolean,
}

/// Errors that can occur during command registration.
///
/// Registration runs once at startup; every variant is logged by the caller
/// and none of them stops the process. Commands registered by a previous run
/// stay routable.
#[derive(Debug)]
pub enum RegistrationError {
    /// The application id or the token is empty.
    MissingCredentials,
    /// The application id is not a non-zero u64.
    InvalidApplicationId(String),
    /// The command spec list is empty.
    EmptyCommandSet,
    /// Two command specs share the same name.
    DuplicateCommandName(String),
    /// The Discord API rejected the call or was unreachable.
    Platform(serenity::Error),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegistrationError::MissingCredentials => {
                write!(f, "application id and token must be non-empty")
            }
            RegistrationError::InvalidApplicationId(id) => {
                write!(f, "invalid application id: {}", id)
            }
            RegistrationError::EmptyCommandSet => write!(f, "no command specs to register"),
            RegistrationError::DuplicateCommandName(name) => {
                write!(f, "duplicate command name: {}", name)
            }
            RegistrationError::Platform(e) => write!(f, "discord api error: {}", e),
        }
    }
}

impl CommandSpec {
    /// Converts the spec into the serenity builder sent on the wire.
    fn to_create_command(&self) -> CreateCommand {
        let mut command = CreateCommand::new(&self.name).description(&self.description);

        for parameter in &self.parameters {
            let kind = match parameter.kind {
                ParameterKind::Text => CommandOptionType::String,
                ParameterKind::Boolean => CommandOptionType::Boolean,
            };
            command = command.add_option(
                CreateCommandOption::new(kind, &parameter.name, &parameter.description)
                    .required(parameter.required),
            );
        }

        command
    }
}

/// Builds the spec of the `bilancia` command, the whole command surface of
/// the bot.
pub fn bilancia_command() -> CommandSpec {
    CommandSpec {
        name: BALANCE_COMMAND.to_string(),
        description: "Bilancia una reazione chimica".to_string(),
        parameters: vec![
            ParameterSpec {
                name: REACTION_PARAMETER.to_string(),
                description: "Reazione da bilanciare".to_string(),
                kind: ParameterKind::Text,
                required: true,
            },
            ParameterSpec {
                name: LOG_PARAMETER.to_string(),
                description: "Se vuoi avere il log della bilanciatura".to_string(),
                kind: ParameterKind::Boolean,
                required: false,
            },
        ],
    }
}

/// Replaces the global application command set with `specs`.
///
/// Performs one `PUT /applications/{id}/commands` call through the Discord
/// REST API. The call overwrites whatever set was registered before, so it is
/// safe to repeat. No retry is attempted on failure.
///
/// # Arguments
///
/// * `application_id` - The Discord application identifier, as a decimal string.
/// * `token` - The static bot token used as bearer credential.
/// * `specs` - The command specs to register; must be non-empty with unique names.
///
/// # Errors
///
/// Returns a [RegistrationError] when the inputs are invalid or the Discord
/// API call fails. Input validation happens before any network activity.
pub async fn register_commands(
    application_id: &str,
    token: &str,
    specs: &[CommandSpec],
) -> Result<(), RegistrationError> {
    if application_id.trim().is_empty() || token.trim().is_empty() {
        return Err(RegistrationError::MissingCredentials);
    }

    let application_id: u64 = application_id
        .parse()
        .map_err(|_| RegistrationError::InvalidApplicationId(application_id.to_string()))?;
    if application_id == 0 {
        return Err(RegistrationError::InvalidApplicationId("0".to_string()));
    }

    if specs.is_empty() {
        return Err(RegistrationError::EmptyCommandSet);
    }

    let mut names = HashSet::new();
    for spec in specs {
        if !names.insert(spec.name.as_str()) {
            return Err(RegistrationError::DuplicateCommandName(spec.name.clone()));
        }
    }

    info!("registering {} application commands", specs.len());

    let http = Http::new(token);
    http.set_application_id(ApplicationId::new(application_id));

    let commands = specs.iter().map(CommandSpec::to_create_command).collect();
    Command::set_global_commands(&http, commands)
        .await
        .map_err(RegistrationError::Platform)?;

    info!("application commands registered");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bilancia_command_spec() {
        let spec = bilancia_command();

        assert_eq!(spec.name, "bilancia");
        assert_eq!(spec.description, "Bilancia una reazione chimica");
        assert_eq!(spec.parameters.len(), 2);

        let reaction = &spec.parameters[0];
        assert_eq!(reaction.name, "reazione");
        assert_eq!(reaction.kind, ParameterKind::Text);
        assert!(reaction.required);

        let log = &spec.parameters[1];
        assert_eq!(log.name, "log");
        assert_eq!(log.kind, ParameterKind::Boolean);
        assert!(!log.required);
    }

    #[test]
    fn test_to_create_command_wire_shape() {
        let json = serde_json::to_value(bilancia_command().to_create_command()).unwrap();

        assert_eq!(json["name"], "bilancia");
        assert_eq!(json["description"], "Bilancia una reazione chimica");

        let options = json["options"].as_array().unwrap();
        assert_eq!(options.len(), 2);
        // Discord wire option types: 3 = string, 5 = boolean
        assert_eq!(options[0]["name"], "reazione");
        assert_eq!(options[0]["type"], 3);
        assert_eq!(options[0]["required"], true);
        assert_eq!(options[1]["name"], "log");
        assert_eq!(options[1]["type"], 5);
        assert_ne!(options[1]["required"], true);
    }

    #[tokio::test]
    async fn test_register_commands_empty_application_id() {
        let result = register_commands("", "token", &[bilancia_command()]).await;
        assert!(matches!(result, Err(RegistrationError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_register_commands_empty_token() {
        let result = register_commands("1234", "", &[bilancia_command()]).await;
        assert!(matches!(result, Err(RegistrationError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_register_commands_non_numeric_application_id() {
        let result = register_commands("not-a-number", "token", &[bilancia_command()]).await;
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidApplicationId(_))
        ));
    }

    #[tokio::test]
    async fn test_register_commands_zero_application_id() {
        let result = register_commands("0", "token", &[bilancia_command()]).await;
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidApplicationId(_))
        ));
    }

    #[tokio::test]
    async fn test_register_commands_empty_spec_list() {
        let result = register_commands("1234", "token", &[]).await;
        assert!(matches!(result, Err(RegistrationError::EmptyCommandSet)));
    }

    #[tokio::test]
    async fn test_register_commands_duplicate_names() {
        let specs = vec![bilancia_command(), bilancia_command()];

        let result = register_commands("1234", "token", &specs).await;
        match result.err().unwrap() {
            RegistrationError::DuplicateCommandName(name) => assert_eq!(name, "bilancia"),
            e => panic!("expected DuplicateCommandName, got {:?}", e),
        }
    }
}
