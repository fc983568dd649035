//! Bridge command names

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named remote call understood by the store process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    SavePrompt,
    FetchPrompts,
    DeletePrompt,
}

impl Command {
    pub const ALL: [Command; 3] = [
        Command::SavePrompt,
        Command::FetchPrompts,
        Command::DeletePrompt,
    ];

    /// Wire name of the command
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::SavePrompt => "save_prompt",
            Command::FetchPrompts => "fetch_prompts",
            Command::DeletePrompt => "delete_prompt",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command name no [`Command`] answers to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        for cmd in Command::ALL {
            assert_eq!(cmd.as_str().parse::<Command>().unwrap(), cmd);
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = "fetch_prompt".parse::<Command>().unwrap_err();
        assert_eq!(err, UnknownCommand("fetch_prompt".into()));
        assert_eq!(err.to_string(), "Unknown command: fetch_prompt");
    }
}
