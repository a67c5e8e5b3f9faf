//! Line commands accepted on stdin.

use std::str::FromStr;

use rowscope_core::{FilterInputs, PresentationMode, RecordId, SortField, ViewError};
use thiserror::Error;

/// One parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Changes engine state.
    Edit(Edit),
    Show { json: bool },
    Help,
    Quit,
}

/// Commands that change engine state.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Filter(FilterInputs),
    Reset,
    Sort(SortField),
    Mode(ModeArg),
    /// 1-based page number.
    Page(usize),
    Next,
    Prev,
    First,
    Last,
    Size(usize),
    Select(RecordId),
    SelectAll,
    Clear,
}

/// Target of a `mode` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Set(PresentationMode),
    Toggle,
}

/// Command parse errors.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Not a positive number: {0}")]
    InvalidNumber(String),

    #[error("Unknown filter key: {0} (expected min, max, from, to or status)")]
    UnknownFilterKey(String),

    #[error(transparent)]
    View(#[from] ViewError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Show { json: false });
        };

        let edit = match head.to_ascii_lowercase().as_str() {
            "show" => {
                return Ok(Command::Show {
                    json: words.next().is_some_and(|w| w.eq_ignore_ascii_case("json")),
                });
            }
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            "filter" => Edit::Filter(parse_filter(words)?),
            "reset" => Edit::Reset,
            "sort" => {
                let field = required(words.next(), "sort", "a field name")?;
                Edit::Sort(field.parse()?)
            }
            "mode" => {
                let target = required(words.next(), "mode", "paged, continuous or toggle")?;
                if target.eq_ignore_ascii_case("toggle") {
                    Edit::Mode(ModeArg::Toggle)
                } else {
                    Edit::Mode(ModeArg::Set(target.parse()?))
                }
            }
            "page" => Edit::Page(positive(required(words.next(), "page", "a page number")?)?),
            "next" => Edit::Next,
            "prev" | "previous" => Edit::Prev,
            "first" => Edit::First,
            "last" => Edit::Last,
            "size" => Edit::Size(positive(required(words.next(), "size", "a page size")?)?),
            "select" => {
                let id = required(words.next(), "select", "a record id")?;
                Edit::Select(RecordId::from(id))
            }
            "all" => Edit::SelectAll,
            "clear" => Edit::Clear,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Command::Edit(edit))
    }
}

/// Usage text for `help`.
pub const HELP: &str = "\
filter [min=N] [max=N] [from=YYYY-MM-DD] [to=YYYY-MM-DD] [status=active|inactive|all]
reset                      clear filters
sort FIELD                 repeat to cycle asc, desc, none
mode paged|continuous|toggle
page N | next | prev | first | last
size N                     rows per page
select ID                  toggle one row
all                        toggle every visible row
clear                      deselect everything
show [json]
quit";

fn required<'a>(
    word: Option<&'a str>,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    word.ok_or(CommandError::MissingArgument { command, what })
}

fn positive(word: &str) -> Result<usize, CommandError> {
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidNumber(word.to_string())),
    }
}

/// `key=value` pairs into raw filter inputs. Values are not validated here.
fn parse_filter<'a>(words: impl Iterator<Item = &'a str>) -> Result<FilterInputs, CommandError> {
    let mut inputs = FilterInputs::default();
    for word in words {
        let (key, value) = word.split_once('=').unwrap_or((word, ""));
        let slot = match key.to_ascii_lowercase().as_str() {
            "min" => &mut inputs.balance_min,
            "max" => &mut inputs.balance_max,
            "from" => &mut inputs.from,
            "to" => &mut inputs.to,
            "status" => &mut inputs.status,
            _ => return Err(CommandError::UnknownFilterKey(key.to_string())),
        };
        *slot = value.to_string();
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("next".parse::<Command>().unwrap(), Command::Edit(Edit::Next));
        assert_eq!("prev".parse::<Command>().unwrap(), Command::Edit(Edit::Prev));
        assert_eq!("all".parse::<Command>().unwrap(), Command::Edit(Edit::SelectAll));
        assert_eq!("QUIT".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("".parse::<Command>().unwrap(), Command::Show { json: false });
        assert_eq!(
            "show json".parse::<Command>().unwrap(),
            Command::Show { json: true }
        );
    }

    #[test]
    fn test_parse_filter() {
        let cmd: Command = "filter min=100 status=active to=2024-01-31".parse().unwrap();
        let Command::Edit(Edit::Filter(inputs)) = cmd else {
            panic!("expected filter");
        };
        assert_eq!(inputs.balance_min, "100");
        assert_eq!(inputs.status, "active");
        assert_eq!(inputs.to, "2024-01-31");
        assert!(inputs.balance_max.is_empty());
    }

    #[test]
    fn test_parse_filter_keeps_garbage_values() {
        let Command::Edit(Edit::Filter(inputs)) = "filter min=abc".parse::<Command>().unwrap()
        else {
            panic!("expected filter");
        };
        assert_eq!(inputs.to_criteria().balance_min, None);
    }

    #[test]
    fn test_parse_filter_unknown_key() {
        let err = "filter colour=red".parse::<Command>().unwrap_err();
        assert!(matches!(err, CommandError::UnknownFilterKey(k) if k == "colour"));
    }

    #[test]
    fn test_parse_sort_and_mode() {
        assert_eq!(
            "sort balance".parse::<Command>().unwrap(),
            Command::Edit(Edit::Sort(SortField::Balance))
        );
        assert!(matches!(
            "sort height".parse::<Command>(),
            Err(CommandError::View(ViewError::UnknownSortField(_)))
        ));
        assert_eq!(
            "mode toggle".parse::<Command>().unwrap(),
            Command::Edit(Edit::Mode(ModeArg::Toggle))
        );
        assert_eq!(
            "mode continuous".parse::<Command>().unwrap(),
            Command::Edit(Edit::Mode(ModeArg::Set(PresentationMode::Continuous)))
        );
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!("page 3".parse::<Command>().unwrap(), Command::Edit(Edit::Page(3)));
        assert_eq!("size 20".parse::<Command>().unwrap(), Command::Edit(Edit::Size(20)));
        assert!(matches!(
            "page 0".parse::<Command>(),
            Err(CommandError::InvalidNumber(_))
        ));
        assert!(matches!(
            "size".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "size", .. })
        ));
    }

    #[test]
    fn test_only_state_changes_are_edits() {
        assert!(matches!("reset".parse::<Command>().unwrap(), Command::Edit(_)));
        assert!(matches!("clear".parse::<Command>().unwrap(), Command::Edit(_)));
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_unknown_command() {
        let err = "dance".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: dance (try 'help')");
    }
}
