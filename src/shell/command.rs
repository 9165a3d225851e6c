/*!
 * Commands
 * Parsed form of one normalized command line
 */

use crate::core::errors::ShellError;
use crate::core::types::{Owner, Size};
use std::path::PathBuf;
use std::str::FromStr;

/// One shell command
///
/// The strategy of an allocation stays a raw symbol: rejecting unknown
/// symbols is the allocator's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `A <owner> <size> <strategy>`
    Allocate {
        owner: Owner,
        size: Size,
        strategy: char,
    },
    /// `F <owner>`
    Free { owner: Owner },
    /// `S`
    Show,
    /// `C`
    Compact,
    /// `R <file>`
    Read { path: PathBuf },
    /// `E`
    Exit,
    /// Blank line
    Empty,
}

impl Command {
    /// Parse a normalized line
    ///
    /// Commands are keyed on the first character of the first token, so
    /// `A` and `ALLOCATE` are the same command. Owners and strategies are the
    /// first character of their tokens.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            return Ok(Command::Empty);
        };
        let invalid = || ShellError::InvalidCommand(line.trim().to_string());

        match first.chars().next() {
            Some('A') => {
                let (Some(owner), Some(size), Some(strategy)) =
                    (tokens.get(1), tokens.get(2), tokens.get(3))
                else {
                    return Err(invalid());
                };
                let size: Size = size.parse().map_err(|_| invalid())?;
                if size == 0 {
                    return Err(invalid());
                }
                Ok(Command::Allocate {
                    owner: first_char(owner),
                    size,
                    strategy: first_char(strategy),
                })
            }
            Some('F') => tokens
                .get(1)
                .map(|owner| Command::Free {
                    owner: first_char(owner),
                })
                .ok_or_else(invalid),
            Some('S') => Ok(Command::Show),
            Some('C') => Ok(Command::Compact),
            Some('R') => tokens
                .get(1)
                .map(|path| Command::Read {
                    path: PathBuf::from(path),
                })
                .ok_or_else(invalid),
            Some('E') => Ok(Command::Exit),
            _ => Err(invalid()),
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Allocate { .. } => "allocate",
            Command::Free { .. } => "free",
            Command::Show => "show",
            Command::Compact => "compact",
            Command::Read { .. } => "read",
            Command::Exit => "exit",
            Command::Empty => "empty",
        }
    }
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line)
    }
}

// Tokens come from split_whitespace and are never empty
fn first_char(token: &str) -> char {
    token.chars().next().unwrap_or_default()
}
