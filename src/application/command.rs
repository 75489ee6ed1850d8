//! Textual commands understood by a [`Session`](super::Session).
//!
//! This is where raw input becomes validated numbers; the trees never see text.

use std::fmt;
use std::str::FromStr;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Traversal;

/// Which tree variant a session drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Nary,
    Binary,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeKind::Nary => f.write_str("nary"),
            TreeKind::Binary => f.write_str("binary"),
        }
    }
}

impl FromStr for TreeKind {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nary" | "n-ary" | "n_ary" => Ok(TreeKind::Nary),
            "binary" | "bin" => Ok(TreeKind::Binary),
            _ => Err(ApplicationError::invalid_input(s, "expected 'nary' or 'binary'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(i64),
    Delete(i64),
    Search(i64),
    Traverse(Traversal),
    /// Reset, then load the configured number of unique random values
    Random,
    Reset,
    Show,
    Export,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "commands: insert N | delete N | search N | \
inorder | preorder | postorder | level-order | random | reset | show | export | help | quit";
}

fn parse_value(verb: &str, arg: Option<&str>) -> ApplicationResult<i64> {
    let arg = arg.ok_or_else(|| ApplicationError::invalid_input(verb, "missing value"))?;
    arg.parse::<i64>()
        .map_err(|e| ApplicationError::invalid_input(arg, e.to_string()))
}

impl FromStr for Command {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(ApplicationError::invalid_input(s, "empty command"));
        };
        let arg = parts.next();
        if let Some(extra) = parts.next() {
            return Err(ApplicationError::invalid_input(extra, "unexpected argument"));
        }

        let verb_lower = verb.to_ascii_lowercase();
        let command = match verb_lower.as_str() {
            "insert" | "add" | "i" => Command::Insert(parse_value(verb, arg)?),
            "delete" | "remove" | "del" | "d" => Command::Delete(parse_value(verb, arg)?),
            "search" | "find" | "s" => Command::Search(parse_value(verb, arg)?),
            "traverse" => {
                let kind = arg.ok_or_else(|| ApplicationError::invalid_input(verb, "missing traversal"))?;
                Command::Traverse(kind.parse()?)
            }
            "random" => Command::Random,
            "reset" | "clear" => Command::Reset,
            "show" | "render" => Command::Show,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => match other.parse::<Traversal>() {
                Ok(kind) if arg.is_none() => Command::Traverse(kind),
                _ => return Err(ApplicationError::invalid_input(verb, "unknown command")),
            },
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("insert 5", Command::Insert(5))]
    #[case("  add   -3 ", Command::Insert(-3))]
    #[case("delete 7", Command::Delete(7))]
    #[case("search 9", Command::Search(9))]
    #[case("inorder", Command::Traverse(Traversal::Inorder))]
    #[case("level-order", Command::Traverse(Traversal::LevelOrder))]
    #[case("traverse postorder", Command::Traverse(Traversal::Postorder))]
    #[case("RANDOM", Command::Random)]
    #[case("reset", Command::Reset)]
    #[case("show", Command::Show)]
    #[case("export", Command::Export)]
    #[case("quit", Command::Quit)]
    fn given_valid_line_when_parsing_then_returns_command(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(line.parse::<Command>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("insert")]
    #[case("insert five")]
    #[case("insert 1 2")]
    #[case("jump 3")]
    #[case("inorder 3")]
    #[case("traverse sideways")]
    fn given_invalid_line_when_parsing_then_errors(#[case] line: &str) {
        assert!(line.parse::<Command>().is_err(), "'{line}' should not parse");
    }

    #[test]
    fn given_non_numeric_value_when_parsing_then_reports_invalid_input() {
        let err = "insert abc".parse::<Command>().unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidInput { ref input, .. } if input == "abc"));
    }

    #[rstest]
    #[case("nary", TreeKind::Nary)]
    #[case("N-ary", TreeKind::Nary)]
    #[case("binary", TreeKind::Binary)]
    fn given_kind_name_when_parsing_then_returns_kind(#[case] input: &str, #[case] expected: TreeKind) {
        assert_eq!(input.parse::<TreeKind>().unwrap(), expected);
    }

    #[test]
    fn given_unknown_kind_when_parsing_then_errors() {
        assert!("ternary".parse::<TreeKind>().is_err());
    }
}
