//! Nickname tally - counts card copies in a decklist.
//!
//! Each card carrying a `Nickname` adds one to that name's count. Names keep the
//! order in which they were first seen, which matches the order cards appear in
//! the deck.

use crate::models::Decklist;
use crate::services::validation::{ValidationError, validate_json};
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Nickname occurrence counts in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NicknameTally {
    counts: IndexMap<String, usize>,
}

impl NicknameTally {
    /// Count for a nickname, if it occurs at all
    pub fn get(&self, nickname: &str) -> Option<usize> {
        self.counts.get(nickname).copied()
    }

    /// Distinct nicknames with their counts, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// Number of distinct nicknames
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted cards
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Display lines such as `2x Elsa`
    pub fn lines(&self) -> Vec<String> {
        self.iter()
            .map(|(name, count)| format!("{}x {}", count, name))
            .collect()
    }

    fn record(&mut self, nickname: &str) {
        *self.counts.entry(nickname.to_string()).or_insert(0) += 1;
    }
}

impl fmt::Display for NicknameTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a NicknameTally {
    type Item = (&'a String, &'a usize);
    type IntoIter = indexmap::map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Tally nicknames across every state's contained objects.
pub fn tally_nicknames(decklist: &Decklist) -> NicknameTally {
    decklist
        .cards()
        .filter_map(|card| card.nickname.as_deref())
        .fold(NicknameTally::default(), |mut tally, nickname| {
            tally.record(nickname);
            tally
        })
}

/// Tally nicknames straight from a parsed JSON document
pub fn tally_value(document: &Value) -> NicknameTally {
    tally_nicknames(&Decklist::from_value(document))
}

/// Read a decklist file and tally its nicknames
pub fn tally_file(path: &Utf8Path) -> Result<NicknameTally, ValidationError> {
    let document = validate_json(path)?;
    let tally = tally_value(&document);
    tracing::debug!(
        "Tallied {} cards ({} distinct) in {}",
        tally.total(),
        tally.len(),
        path
    );
    Ok(tally)
}
