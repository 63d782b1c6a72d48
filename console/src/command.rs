//! Parsing of the console's line commands.

use country_core::CountryId;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list | refresh     re-fetch the country list
  name <text>        type into the name field
  edit <id>          load a listed country into the form
  save               add or update the country in the form
  reset              clear the form
  delete <id>        delete a country (asks for confirmation)
  show <id>          fetch a single country
  help               show this text
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Name(String),
    Edit(CountryId),
    Save,
    Reset,
    Delete(CountryId),
    Show(CountryId),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an id")]
    MissingId(&'static str),
    #[error("`{0}` is not a valid id")]
    InvalidId(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match trimmed.split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "refresh" => Command::Refresh,
            "name" => Command::Name(rest.to_string()),
            "edit" => Command::Edit(parse_id("edit", rest)?),
            "save" => Command::Save,
            "reset" => Command::Reset,
            "delete" => Command::Delete(parse_id("delete", rest)?),
            "show" => Command::Show(parse_id("show", rest)?),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<CountryId, CommandError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(Command::parse("   \n"), Ok(None));
    }

    #[test]
    fn leading_whitespace_before_command() {
        assert_eq!(Command::parse(" \t save\r\n"), Ok(Some(Command::Save)));
        assert_eq!(Command::parse(" \t \r\n"), Ok(None));
    }

    #[test]
    fn name_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("name United States\n"),
            Ok(Some(Command::Name("United States".to_string())))
        );
    }

    #[test]
    fn bare_name_clears_the_field() {
        assert_eq!(Command::parse("name"), Ok(Some(Command::Name(String::new()))));
    }

    #[test]
    fn id_commands() {
        assert_eq!(Command::parse("edit 2"), Ok(Some(Command::Edit(2))));
        assert_eq!(Command::parse("DELETE 7"), Ok(Some(Command::Delete(7))));
        assert_eq!(Command::parse("show  3 "), Ok(Some(Command::Show(3))));
    }

    #[test]
    fn id_errors() {
        assert_eq!(Command::parse("edit"), Err(CommandError::MissingId("edit")));
        assert_eq!(
            Command::parse("delete two"),
            Err(CommandError::InvalidId("two".to_string()))
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            Command::parse("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }
}
