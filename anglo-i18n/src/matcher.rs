//! Match finding
//!
//! Scans lowercased text and records every literal span that needs
//! substituting, keyed by the matched text itself. Four passes run in
//! [`PASS_ORDER`]; a later pass overwrites an earlier one only when both
//! produce the exact same key string. Nothing is deduplicated by position.
//!
//! The title and phrase passes use plain substring containment, not word
//! boundaries, so a key embedded in a longer word (`ms.` in `items.`) is
//! recorded too. Existing dictionary data may rely on that behaviour.

use crate::resolver::ResolvedDialect;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Whole words, keeping hyphen- or apostrophe-joined words (`well-known`,
/// `y'all`, `mother-in-law`) as one token
static WORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+[-'](?:\w+)?['-]?\w+|\w+").expect("word token pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPass {
    /// Honorific titles, checked first so `mr.` is seen before the word
    /// tokenizer splits off the period
    Title,
    /// Single and hyphen/apostrophe-joined words
    Word,
    /// Multi-word dictionary phrases
    Phrase,
    /// Clock times
    Time,
}

/// Order in which passes are merged; later passes win on identical keys
pub const PASS_ORDER: [MatchPass; 4] = [
    MatchPass::Title,
    MatchPass::Word,
    MatchPass::Phrase,
    MatchPass::Time,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub replacement: String,
    pub pass: MatchPass,
}

/// Lowercase matched literal to its replacement, built fresh per call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchMap(HashMap<String, Match>);

impl MatchMap {
    pub fn new() -> Self {
        MatchMap(HashMap::new())
    }

    /// Record a match, replacing any earlier entry for the same key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        replacement: impl Into<String>,
        pass: MatchPass,
    ) {
        let key = key.into();
        let replacement = replacement.into();
        trace!(?pass, key = %key, replacement = %replacement, "match");
        self.0.insert(key, Match { replacement, pass });
    }

    pub fn get(&self, key: &str) -> Option<&Match> {
        self.0.get(key)
    }

    pub fn replacement(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|m| m.replacement.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Match)> {
        self.0.iter()
    }
}

/// Find every substitutable span in `lower_text`
///
/// `lower_text` must already be lowercased. An empty map means nothing in
/// the text needs translating.
pub fn find_matches(lower_text: &str, dialect: &ResolvedDialect) -> MatchMap {
    let mut matches = MatchMap::new();
    for pass in PASS_ORDER {
        run_pass(pass, lower_text, dialect, &mut matches);
    }
    debug!(direction = %dialect.direction, matches = matches.len(), "found matches");
    matches
}

fn run_pass(
    pass: MatchPass,
    lower_text: &str,
    dialect: &ResolvedDialect,
    matches: &mut MatchMap,
) {
    match pass {
        MatchPass::Title => {
            for (title, replacement) in dialect.titles.iter() {
                if lower_text.contains(title.as_str()) {
                    matches.insert(title.as_str(), capitalize_first(replacement), pass);
                }
            }
        }
        MatchPass::Word => {
            for token in WORD_TOKEN.find_iter(lower_text) {
                if let Some(replacement) = dialect.terms.get(token.as_str()) {
                    matches.insert(token.as_str(), replacement.as_str(), pass);
                }
            }
        }
        MatchPass::Phrase => {
            for (phrase, replacement) in dialect.terms.phrases() {
                if lower_text.contains(phrase.as_str()) {
                    matches.insert(phrase.as_str(), replacement.as_str(), pass);
                }
            }
        }
        MatchPass::Time => {
            for (time, rewritten) in dialect.time.find_all(lower_text) {
                matches.insert(time, rewritten, pass);
            }
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
