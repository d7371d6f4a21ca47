//! Keyword command handling shared by every transport

mod help;
mod items;
mod lists;
mod search;
mod stats;

pub use items::split_items;

use crate::lists::ListStore;
use list_bot_types::ListError;
use std::str::FromStr;
use strum::{AsRefStr, EnumString};

pub const USAGE_CREATE: &str = "❌ Usage: `create <list_name>`";
pub const USAGE_ADD: &str = "❌ Usage: `add <list_name> <item>`";
pub const USAGE_ADD_MANY: &str = "❌ Usage: `multi <list_name> <item1>, <item2>, <item3>`";
pub const USAGE_MENTION: &str = "❌ Usage: `@<bot> <list_name> <item1>, <item2>, <item3>`";
pub const USAGE_REMOVE: &str = "❌ Usage: `remove <list_name> <item>`";
pub const USAGE_SHOW: &str = "❌ Usage: `show <list_name>`";
pub const USAGE_DELETE: &str = "❌ Usage: `delete <list_name>`";
pub const USAGE_SEARCH: &str = "❌ Usage: `search <term>`";

/// Leading keyword of a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Keyword {
    Create,
    Lists,
    Add,
    Remove,
    Show,
    Delete,
    Search,
    Help,
    /// Not advertised in help
    Stats,
    /// Terminal stand-in for the mention form
    Multi,
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create <list>`
    Create { name: String },
    /// `lists`
    Lists,
    /// `add <list> <item...>`
    Add { list: String, item: String },
    /// `@bot <list> a, b, c` or `multi <list> a, b, c`
    AddMany { list: String, items: Vec<String> },
    /// `remove <list> <item...>`
    Remove { list: String, item: String },
    /// `show <list>`
    Show { name: String },
    /// `delete <list>`
    Delete { name: String },
    /// `search <term...>`
    Search { term: String },
    Help,
    Stats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank input
    Empty,
    /// First token is not a known keyword, or mentions someone else
    Unknown(String),
    /// Known keyword with missing arguments; carries the usage line
    Usage(&'static str),
}

impl ParseError {
    pub fn reply(&self) -> String {
        match self {
            ParseError::Empty => "❌ Empty command. Type 'help' for available commands".to_string(),
            ParseError::Unknown(token) => format!(
                "❌ Unknown command: {}\nType 'help' for available commands",
                token
            ),
            ParseError::Usage(usage) => usage.to_string(),
        }
    }
}

/// Parse one line of text.
///
/// `bot_handle` is the bot's username without the `@`. When set, only a
/// leading mention of that handle selects the multi-add form; when `None`,
/// any leading mention does, and so does the `multi` keyword.
pub fn parse(text: &str, bot_handle: Option<&str>) -> Result<Command, ParseError> {
    let text = text.trim();
    let parts: Vec<&str> = text.split_whitespace().collect();

    log::debug!("Commands: Parsing '{}' -> {} parts", text, parts.len());

    let first = *parts.first().ok_or(ParseError::Empty)?;
    let args = &parts[1..];

    if let Some(handle) = first.strip_prefix('@') {
        let addressed_to_us = bot_handle.map_or(true, |ours| ours.eq_ignore_ascii_case(handle));
        if !addressed_to_us {
            return Err(ParseError::Unknown(first.to_string()));
        }
        return parse_add_many(args, USAGE_MENTION);
    }

    let keyword = Keyword::from_str(first).map_err(|_| {
        log::debug!("Commands: Unknown command '{}'", first);
        ParseError::Unknown(first.to_lowercase())
    })?;
    log::debug!("Commands: Matched '{}' with {} args", keyword.as_ref(), args.len());

    match keyword {
        Keyword::Create => joined(args)
            .map(|name| Command::Create { name })
            .ok_or(ParseError::Usage(USAGE_CREATE)),
        Keyword::Lists => Ok(Command::Lists),
        Keyword::Add => {
            let (list, item) = list_and_rest(args).ok_or(ParseError::Usage(USAGE_ADD))?;
            Ok(Command::Add { list, item })
        }
        Keyword::Remove => {
            let (list, item) = list_and_rest(args).ok_or(ParseError::Usage(USAGE_REMOVE))?;
            Ok(Command::Remove { list, item })
        }
        Keyword::Show => joined(args)
            .map(|name| Command::Show { name })
            .ok_or(ParseError::Usage(USAGE_SHOW)),
        Keyword::Delete => joined(args)
            .map(|name| Command::Delete { name })
            .ok_or(ParseError::Usage(USAGE_DELETE)),
        Keyword::Search => joined(args)
            .map(|term| Command::Search { term })
            .ok_or(ParseError::Usage(USAGE_SEARCH)),
        Keyword::Help => Ok(Command::Help),
        Keyword::Stats => Ok(Command::Stats),
        Keyword::Multi if bot_handle.is_some() => Err(ParseError::Unknown(first.to_lowercase())),
        Keyword::Multi => parse_add_many(args, USAGE_ADD_MANY),
    }
}

/// Run a parsed command against the store and render the reply
pub fn execute(cmd: Command, store: &mut ListStore, bot_handle: Option<&str>) -> String {
    match cmd {
        Command::Create { name } => lists::create(store, &name),
        Command::Lists => lists::list_all(store),
        Command::Add { list, item } => items::add(store, &list, &item),
        Command::AddMany { list, items } => items::add_many(store, &list, &items),
        Command::Remove { list, item } => items::remove(store, &list, &item),
        Command::Show { name } => lists::show(store, &name),
        Command::Delete { name } => lists::delete(store, &name),
        Command::Search { term } => search::execute(store, &term),
        Command::Help => help::execute(store.limits(), bot_handle),
        Command::Stats => stats::execute(store),
    }
}

/// Parse and execute, turning parse failures into replies as well
pub fn respond(text: &str, store: &mut ListStore, bot_handle: Option<&str>) -> String {
    match parse(text, bot_handle) {
        Ok(cmd) => execute(cmd, store, bot_handle),
        Err(e) => e.reply(),
    }
}

fn error_reply(e: &ListError) -> String {
    format!("❌ {}", e)
}

fn parse_add_many(args: &[&str], usage: &'static str) -> Result<Command, ParseError> {
    let (list, items_text) = list_and_rest(args).ok_or(ParseError::Usage(usage))?;
    Ok(Command::AddMany {
        list,
        items: split_items(&items_text),
    })
}

fn joined(args: &[&str]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}

/// First token is the list name, everything after it is one argument
fn list_and_rest(args: &[&str]) -> Option<(String, String)> {
    let (list, rest) = args.split_first()?;
    let rest = joined(rest)?;
    Some((list.to_string(), rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_bot_types::ListLimits;

    fn store() -> ListStore {
        ListStore::new(ListLimits::default())
    }

    #[test]
    fn test_parse_create() {
        assert_eq!(
            parse("create To Watch", None),
            Ok(Command::Create {
                name: "To Watch".to_string()
            })
        );
        assert_eq!(parse("create", None), Err(ParseError::Usage(USAGE_CREATE)));
    }

    #[test]
    fn test_parse_add_splits_list_from_item() {
        assert_eq!(
            parse("add groceries whole milk", None),
            Ok(Command::Add {
                list: "groceries".to_string(),
                item: "whole milk".to_string(),
            })
        );
        assert_eq!(parse("add groceries", None), Err(ParseError::Usage(USAGE_ADD)));
        assert_eq!(parse("add", None), Err(ParseError::Usage(USAGE_ADD)));
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            parse("remove groceries whole milk", None),
            Ok(Command::Remove {
                list: "groceries".to_string(),
                item: "whole milk".to_string(),
            })
        );
        assert_eq!(parse("remove groceries", None), Err(ParseError::Usage(USAGE_REMOVE)));
    }

    #[test]
    fn test_parse_single_argument_commands() {
        assert!(matches!(parse("show groceries", None), Ok(Command::Show { .. })));
        assert!(matches!(parse("delete groceries", None), Ok(Command::Delete { .. })));
        assert_eq!(parse("show", None), Err(ParseError::Usage(USAGE_SHOW)));
        assert_eq!(parse("delete", None), Err(ParseError::Usage(USAGE_DELETE)));
        assert_eq!(
            parse("search oat milk", None),
            Ok(Command::Search {
                term: "oat milk".to_string()
            })
        );
        assert_eq!(parse("search", None), Err(ParseError::Usage(USAGE_SEARCH)));
    }

    #[test]
    fn test_parse_no_argument_commands() {
        assert_eq!(parse("lists", None), Ok(Command::Lists));
        assert_eq!(parse("help", None), Ok(Command::Help));
        assert_eq!(parse("stats", None), Ok(Command::Stats));
    }

    #[test]
    fn test_case_insensitive_keywords() {
        assert!(matches!(parse("CREATE groceries", None), Ok(Command::Create { .. })));
        assert!(matches!(parse("Lists", None), Ok(Command::Lists)));
        assert!(matches!(parse("HeLp", None), Ok(Command::Help)));
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert_eq!(
            parse("Tip @someone 100", None),
            Err(ParseError::Unknown("tip".to_string()))
        );
        assert_eq!(parse("   ", None), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_mention_form() {
        assert_eq!(
            parse("@ListBot groceries milk, bread ,, eggs", Some("listbot")),
            Ok(Command::AddMany {
                list: "groceries".to_string(),
                items: vec!["milk".to_string(), "bread".to_string(), "eggs".to_string()],
            })
        );
        assert_eq!(
            parse("@listbot groceries", Some("listbot")),
            Err(ParseError::Usage(USAGE_MENTION))
        );
        assert_eq!(
            parse("@someone_else groceries milk", Some("listbot")),
            Err(ParseError::Unknown("@someone_else".to_string()))
        );
        assert!(matches!(
            parse("@anybot groceries milk", None),
            Ok(Command::AddMany { .. })
        ));
    }

    #[test]
    fn test_parse_multi_keyword() {
        assert_eq!(
            parse("multi groceries a, b", None),
            Ok(Command::AddMany {
                list: "groceries".to_string(),
                items: vec!["a".to_string(), "b".to_string()],
            })
        );
        assert_eq!(parse("multi groceries", None), Err(ParseError::Usage(USAGE_ADD_MANY)));
    }

    #[test]
    fn test_multi_keyword_is_unknown_with_a_bot_handle() {
        assert_eq!(
            parse("multi groceries a, b", Some("listbot")),
            Err(ParseError::Unknown("multi".to_string()))
        );
        assert_eq!(
            parse("MULTI groceries a, b", Some("listbot")),
            Err(ParseError::Unknown("multi".to_string()))
        );
    }

    #[test]
    fn test_respond_scenario() {
        let mut s = store();
        assert!(respond("create groceries", &mut s, None).starts_with("✅"));
        assert!(respond("add groceries milk", &mut s, None).contains("Added 'milk'"));
        respond("add groceries bread", &mut s, None);

        let shown = respond("show groceries", &mut s, None);
        assert!(shown.contains("1. milk\n2. bread"));

        respond("remove groceries milk", &mut s, None);
        assert_eq!(s.show("groceries").unwrap().items(), vec!["bread"]);
    }

    #[test]
    fn test_respond_reports_errors_as_text() {
        let mut s = store();
        assert!(respond("show nope", &mut s, None).contains("not found"));
        assert!(respond("frobnicate", &mut s, None).contains("Unknown command: frobnicate"));
        assert_eq!(respond("add groceries", &mut s, None), USAGE_ADD);

        respond("create groceries", &mut s, None);
        assert!(respond("create Groceries", &mut s, None).contains("already exists"));
        assert!(respond("remove groceries cheese", &mut s, None).contains("not found in"));
    }

    #[test]
    fn test_respond_duplicate_is_distinct_from_success() {
        let mut s = store();
        respond("create groceries", &mut s, None);
        let first = respond("add groceries Milk", &mut s, None);
        let second = respond("add groceries milk", &mut s, None);
        assert!(first.starts_with("✅"));
        assert!(second.starts_with("⚠️"));
        assert!(second.contains("already in"));
    }

    #[test]
    fn test_respond_mention_add_many() {
        let mut s = store();
        respond("create groceries", &mut s, Some("listbot"));
        let reply = respond("@listbot groceries a, b, a", &mut s, Some("listbot"));
        assert!(reply.contains("Added 2 items"));
        assert!(reply.contains("Skipped 1 duplicate"));
        assert_eq!(s.show("groceries").unwrap().items(), vec!["a", "b"]);
    }
}
