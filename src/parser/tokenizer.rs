// ✂️ Argument Tokenizer - "1 n/Alice t/a t/b" → preamble + prefix multimap
//
// A prefix only counts when it starts the string or follows whitespace, so
// `n/` is never found inside `nkn/`. Values run up to the next recognised
// prefix and are trimmed. Repeated prefixes keep every value in order.

use super::syntax::Prefix;
use crate::error::ParseError;
use std::collections::HashMap;

// ============================================================================
// ARGUMENT MULTIMAP
// ============================================================================

/// Result of tokenizing one argument string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Last value recorded for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value recorded for `prefix`, in encounter order
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails if any of `prefixes` occurred more than once
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|p| self.values.get(p).is_some_and(|v| v.len() > 1))
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }

    fn put(&mut self, prefix: Prefix, value: String) {
        self.values.entry(prefix).or_default().push(value);
    }
}

// ============================================================================
// TOKENIZER
// ============================================================================

pub struct ArgumentTokenizer;

impl ArgumentTokenizer {
    /// Split `args` into a preamble and the values of each recognised prefix
    pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
        let positions = find_all_prefix_positions(args, prefixes);
        extract_arguments(args, &positions)
    }
}

/// (byte offset, prefix) of every recognised occurrence, sorted by offset
fn find_all_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .filter(move |(start, _)| starts_token(args, *start))
                .map(move |(start, _)| (start, prefix))
        })
        .collect();

    positions.sort_by_key(|(start, _)| *start);
    positions
}

fn starts_token(args: &str, start: usize) -> bool {
    start == 0
        || args[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
}

fn extract_arguments(args: &str, positions: &[(usize, Prefix)]) -> ArgumentMultimap {
    let mut multimap = ArgumentMultimap::default();

    let preamble_end = positions.first().map(|(start, _)| *start).unwrap_or(args.len());
    multimap.preamble = args[..preamble_end].trim().to_string();

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        multimap.put(*prefix, args[value_start..value_end].trim().to_string());
    }

    multimap
}

// ============================================================================
// TESTS
// ============================================================================
