//! # Console Commands Module
//!
//! All commands reachable from the `bodega>` prompt.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (grammar, dispatch)
//! ├── catalog.rs  ◄─── add, list, find, remove, export
//! └── money.rs    ◄─── total, split
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Prompt                                                                 │
//! │  ──────                                                                 │
//! │  bodega> add "Cafe Grano" 12.50                                         │
//! │         │                                                               │
//! │         │ tokenize()  ──► ["add", "Cafe Grano", "12.50"]                │
//! │         ▼                                                               │
//! │  parse()  ──► Command::Add { name, price }                              │
//! │         │                                                               │
//! │         │ (arity checked here, values still raw text)                   │
//! │         ▼                                                               │
//! │  dispatch()  ──► catalog::add(state, name, price)                       │
//! │         │                                                               │
//! │         │ (value parsing and business rules run in the handler)         │
//! │         ▼                                                               │
//! │  Result<CommandOutput, CommandError>                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing is split in two on purpose: `parse` only decides WHICH command
//! and checks argument COUNT, while handlers own value parsing. A bad
//! price is a validation error, not a usage error.

pub mod catalog;
pub mod money;

use crate::error::CommandError;
use crate::state::AppState;

/// Reference text printed by the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  help                     Show this reference
  add <name> <price>       Put a product on the shelf (quote multi-word names)
  list                     List all products in shelf order
  find <name>              Show one product by exact name
  remove <name>            Take a product off the shelf
  total                    Sum the value of everything on the shelf
  split <amount> <shares>  Divide an amount evenly, showing the remainder
  export                   Print the shelf as JSON
  quit | exit              End the session";

/// A fully parsed command, arguments still as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Add { name: String, price: String },
    List,
    Find { name: String },
    Remove { name: String },
    Total,
    Split { amount: String, shares: String },
    Export,
    Quit,
}

/// What the prompt loop should do with a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Print this text and show the next prompt
    Text(String),

    /// End the session
    Exit,
}

/// Splits a command line into tokens.
///
/// Double quotes group words into one token, so product names with
/// spaces work: `add "Cafe Grano" 12.50`. Quotes may also be empty,
/// producing an empty token that downstream validation rejects with
/// a proper message instead of a usage error.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(CommandError::usage("unterminated quote in command"));
    }
    if has_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Parses a command line into a [`Command`].
///
/// Verbs are case-insensitive. Wrong argument counts produce a usage
/// error naming the expected form.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let tokens = tokenize(line)?;
    let Some((verb, args)) = tokens.split_first() else {
        return Err(CommandError::usage("empty command"));
    };

    let verb = verb.to_lowercase();
    match (verb.as_str(), args) {
        ("help", []) => Ok(Command::Help),
        ("add", [name, price]) => Ok(Command::Add {
            name: name.clone(),
            price: price.clone(),
        }),
        ("add", _) => Err(CommandError::usage("usage: add <name> <price>")),
        ("list", []) => Ok(Command::List),
        ("find", [name]) => Ok(Command::Find { name: name.clone() }),
        ("find", _) => Err(CommandError::usage("usage: find <name>")),
        ("remove", [name]) => Ok(Command::Remove { name: name.clone() }),
        ("remove", _) => Err(CommandError::usage("usage: remove <name>")),
        ("total", []) => Ok(Command::Total),
        ("split", [amount, shares]) => Ok(Command::Split {
            amount: amount.clone(),
            shares: shares.clone(),
        }),
        ("split", _) => Err(CommandError::usage("usage: split <amount> <shares>")),
        ("export", []) => Ok(Command::Export),
        ("quit" | "exit", []) => Ok(Command::Quit),
        ("help" | "list" | "total" | "export" | "quit" | "exit", _) => Err(
            CommandError::usage(format!("{} takes no arguments", verb)),
        ),
        _ => Err(CommandError::usage(format!(
            "unknown command '{}', type 'help' for the reference",
            verb
        ))),
    }
}

/// Parses a line and runs the matching handler against the state.
pub fn dispatch(line: &str, state: &mut AppState) -> Result<CommandOutput, CommandError> {
    let command = parse(line)?;
    let output = match command {
        Command::Help => CommandOutput::Text(HELP_TEXT.to_string()),
        Command::Add { name, price } => CommandOutput::Text(catalog::add(state, name, &price)?),
        Command::List => CommandOutput::Text(catalog::list(state)),
        Command::Find { name } => CommandOutput::Text(catalog::find(state, &name)?),
        Command::Remove { name } => CommandOutput::Text(catalog::remove(state, &name)?),
        Command::Total => CommandOutput::Text(money::total(state)),
        Command::Split { amount, shares } => {
            CommandOutput::Text(money::split(state, &amount, &shares)?)
        }
        Command::Export => CommandOutput::Text(catalog::export(state)?),
        Command::Quit => CommandOutput::Exit,
    };
    Ok(output)
}

/// Formats a count with its noun, pluralized with a trailing `s`.
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::ErrorCode;

    #[test]
    fn test_tokenize_plain_words() {
        let tokens = tokenize("add Milk 2.50").unwrap();
        assert_eq!(tokens, vec!["add", "Milk", "2.50"]);
    }

    #[test]
    fn test_tokenize_quoted_multiword() {
        let tokens = tokenize("add \"Cafe Grano\" 12.50").unwrap();
        assert_eq!(tokens, vec!["add", "Cafe Grano", "12.50"]);
    }

    #[test]
    fn test_tokenize_empty_quotes_keep_empty_token() {
        let tokens = tokenize("add \"\" 1.00").unwrap();
        assert_eq!(tokens, vec!["add", "", "1.00"]);
    }

    #[test]
    fn test_tokenize_collapses_extra_whitespace() {
        let tokens = tokenize("  list   ").unwrap();
        assert_eq!(tokens, vec!["list"]);
    }

    #[test]
    fn test_tokenize_rejects_unterminated_quote() {
        let err = tokenize("add \"Cafe Grano 12.50").unwrap_err();
        assert_eq!(err.code, ErrorCode::UsageError);
    }

    #[test]
    fn test_parse_add() {
        let cmd = parse("add Milk 2.50").unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "Milk".to_string(),
                price: "2.50".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_on_verbs() {
        assert_eq!(parse("LIST").unwrap(), Command::List);
        assert_eq!(parse("Quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_quit_and_exit_are_synonyms() {
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_wrong_arity_is_usage_error() {
        let err = parse("add Milk").unwrap_err();
        assert_eq!(err.code, ErrorCode::UsageError);
        assert_eq!(err.message, "usage: add <name> <price>");

        let err = parse("list now").unwrap_err();
        assert_eq!(err.code, ErrorCode::UsageError);
        assert_eq!(err.message, "list takes no arguments");
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse("frobnicate").unwrap_err();
        assert_eq!(err.code, ErrorCode::UsageError);
        assert!(err.message.contains("unknown command 'frobnicate'"));
    }

    #[test]
    fn test_dispatch_add_then_exit() {
        let mut state = AppState::new(AppConfig::default());

        let output = dispatch("add Milk 2.50", &mut state).unwrap();
        match output {
            CommandOutput::Text(text) => assert!(text.contains("Added Milk")),
            CommandOutput::Exit => panic!("add must not exit"),
        }
        assert_eq!(state.inventory.len(), 1);

        assert_eq!(dispatch("quit", &mut state).unwrap(), CommandOutput::Exit);
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "product"), "1 product");
        assert_eq!(plural(3, "product"), "3 products");
        assert_eq!(plural(0, "product"), "0 products");
    }
}
