//! Command: a stateless administrative action sent to the bridge.

use serde::{Deserialize, Serialize};

/// Administrative action understood by the bridge's command endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Command {
    /// Drop the bridge's device database.
    DbDelete,
    /// Stop the bridge process.
    Exit,
    /// Any other command name, passed through untouched.
    Other(String),
}

impl Command {
    /// Commands offered as buttons on the console.
    pub const BUILTIN: [Command; 2] = [Command::DbDelete, Command::Exit];

    /// Wire name of the command.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DbDelete => "DB_delete",
            Self::Exit => "exit",
            Self::Other(name) => name,
        }
    }

    /// Button caption shown to the operator.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::DbDelete => "\u{1F5D1} Удалить базу устройств",
            Self::Exit => "Выход",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Command {
    fn from(value: &str) -> Self {
        match value {
            "DB_delete" => Self::DbDelete,
            "exit" => Self::Exit,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Command {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DB_delete" => Self::DbDelete,
            "exit" => Self::Exit,
            _ => Self::Other(value),
        }
    }
}

impl From<Command> for String {
    fn from(value: Command) -> Self {
        match value {
            Command::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
