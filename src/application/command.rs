//! Slash-command parsing.

/// Commands understood by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Menu,
    Help,
    Form,
    HideMenu,
    ShowData,
    ClearData,
    /// `/chk <number>`; the argument is the first word after the command.
    Check(Option<String>),
    Commission,
    Feedback,
    Cancel,
    Settings,
    Stats,
    ListGroups,
    /// `/broadcast [message]`; without a message the selective flow starts.
    Broadcast(Option<String>),
}

/// Parse error for command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a message into a command.
///
/// A `@botname` suffix on the command word is ignored so commands work
/// from the group menu.
pub fn parse_command(text: &str) -> Result<Command, CommandParseError> {
    let text = text.trim_start();
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let rest = text[raw_command.len()..].trim();
    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(Command::Start),
        "/menu" => Ok(Command::Menu),
        "/help" => Ok(Command::Help),
        "/form" => Ok(Command::Form),
        "/hidemenu" => Ok(Command::HideMenu),
        "/showdata" => Ok(Command::ShowData),
        "/cleardata" => Ok(Command::ClearData),
        "/chk" => Ok(Command::Check(
            rest.split_whitespace().next().map(str::to_string),
        )),
        "/comm" => Ok(Command::Commission),
        "/feedback" => Ok(Command::Feedback),
        "/cancel" => Ok(Command::Cancel),
        "/settings" => Ok(Command::Settings),
        "/stats" => Ok(Command::Stats),
        "/listgroups" => Ok(Command::ListGroups),
        "/broadcast" => Ok(Command::Broadcast(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("menu", "Show the menu buttons"),
        ("form", "Deposit report template"),
        ("showdata", "Show today's collected data"),
        ("cleardata", "Clear today's collected data"),
        ("chk", "Check and track a number"),
        ("comm", "Commission calculator"),
        ("feedback", "Send feedback to the owner"),
        ("hidemenu", "Hide the menu buttons"),
        ("help", "Show all commands"),
    ]
}
