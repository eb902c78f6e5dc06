//! Console controls: one command per input line.

use std::fmt;
use std::path::PathBuf;

pub(crate) const HELP_TEXT: &str = "\
Commands:
  login                  open the Spotify login page
  callback <address>     paste the address you were redirected to after login
  load <file.csv>        load a playlist export (requires login)
  search <text>          show tracks whose title, artist or album contains <text>
  search                 show every track again
  logout                 forget the access token and the playlist
  status                 show the current state
  help                   show this text
  quit                   exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Login,
    Callback(String),
    Load(PathBuf),
    Search(String),
    Logout,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "no command given"),
            CommandError::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            CommandError::MissingArgument(command) => {
                write!(f, "`{command}` needs an argument; try `help`")
            }
        }
    }
}

pub(crate) fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "login" => Ok(Command::Login),
        "callback" => required(rest, "callback").map(|callback| Command::Callback(callback.to_string())),
        "load" => required(rest, "load").map(|path| Command::Load(PathBuf::from(unquote(path)))),
        // Unlike the others, an empty search is meaningful: it clears the filter.
        "search" => Ok(Command::Search(rest.to_string())),
        "logout" => Ok(Command::Logout),
        "status" => Ok(Command::Status),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(word.to_string())),
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn unquote(path: &str) -> &str {
    path.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(path)
}
