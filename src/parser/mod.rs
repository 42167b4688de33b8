// 🔀 Address Book Parser - command keyword → parse function
//
// The first word of the input picks a parser from the registry; the rest of
// the line (leading whitespace included) is handed to it untouched.

pub mod commands;
pub mod syntax;
pub mod tokenizer;
pub mod util;

pub use syntax::Prefix;
pub use tokenizer::{ArgumentMultimap, ArgumentTokenizer};

use crate::commands::{self as cmd, Command};
use crate::error::ParseError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// Turns the argument text of one command into a Command
pub type ParseFn = fn(&str) -> Result<Command, ParseError>;

static PARSERS: Lazy<HashMap<&'static str, ParseFn>> = Lazy::new(|| {
    let entries: [(&'static str, ParseFn); 13] = [
        (cmd::ADD_WORD, commands::parse_add),
        (cmd::EDIT_WORD, commands::parse_edit),
        (cmd::DELETE_WORD, commands::parse_delete),
        (cmd::FIND_WORD, commands::parse_find),
        (cmd::LIST_WORD, commands::parse_list),
        (cmd::CLEAR_WORD, commands::parse_clear),
        (cmd::REMARK_WORD, commands::parse_remark),
        (cmd::SORT_WORD, commands::parse_sort),
        (cmd::SCHEDULE_WORD, commands::parse_schedule),
        (cmd::COMPLETE_WORD, commands::parse_complete),
        (cmd::GATHER_WORD, commands::parse_gather),
        (cmd::HELP_WORD, commands::parse_help),
        (cmd::EXIT_WORD, commands::parse_exit),
    ];
    entries.into_iter().collect()
});

/// Look up the parser registered for `keyword`
pub fn get_parser(keyword: &str) -> Option<ParseFn> {
    PARSERS.get(keyword).copied()
}

/// Every registered command keyword, sorted
pub fn command_words() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = PARSERS.keys().copied().collect();
    words.sort_unstable();
    words
}

// ============================================================================
// ADDRESS BOOK PARSER
// ============================================================================

pub struct AddressBookParser;

impl AddressBookParser {
    pub fn parse_command(input: &str) -> Result<Command, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::invalid_format(cmd::HELP_USAGE));
        }

        let split = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (keyword, arguments) = trimmed.split_at(split);

        debug!(keyword, arguments, "Parsing command");

        let parse = get_parser(keyword).ok_or(ParseError::UnknownCommand)?;
        parse(arguments)
    }
}
