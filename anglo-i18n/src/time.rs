//! Clock-time notation
//!
//! American English writes `6:30`, British English writes `6.30`. Both
//! patterns accept hours 1-12 and minutes 00-59 and require a word boundary
//! before the hour, so `13:30` and `0:45` are left alone rather than having
//! `3:30` picked out of the middle. A suffix such as `pm` may follow the
//! minutes, another digit may not.

use regex::Regex;
use std::sync::LazyLock;

static COLON_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:1[0-2]|[1-9]):[0-5][0-9]").expect("colon time pattern is valid")
});

static DOT_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:1[0-2]|[1-9])\.[0-5][0-9]").expect("dot time pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `H:MM`, rewritten to `H.MM`
    Colon,
    /// `H.MM`, rewritten to `H:MM`
    Dot,
}

impl TimeFormat {
    pub fn pattern(&self) -> &'static Regex {
        match self {
            TimeFormat::Colon => &COLON_TIME,
            TimeFormat::Dot => &DOT_TIME,
        }
    }

    pub fn source_separator(&self) -> char {
        match self {
            TimeFormat::Colon => ':',
            TimeFormat::Dot => '.',
        }
    }

    pub fn target_separator(&self) -> char {
        match self {
            TimeFormat::Colon => '.',
            TimeFormat::Dot => ':',
        }
    }

    /// Rewrite one matched time token into the other notation
    pub fn rewrite(&self, time: &str) -> String {
        time.replacen(self.source_separator(), &self.target_separator().to_string(), 1)
    }

    /// Every time token in `text`, paired with its rewritten form
    pub fn find_all<'t>(
        &self,
        text: &'t str,
    ) -> impl Iterator<Item = (&'t str, String)> + 't {
        let format = *self;
        self.pattern()
            .find_iter(text)
            .filter(move |m| !text[m.end()..].starts_with(|c: char| c.is_ascii_digit()))
            .map(move |m| (m.as_str(), format.rewrite(m.as_str())))
    }
}
