//! Substitution engine
//!
//! Applies a [`MatchMap`] to the original-case text. All keys are escaped and
//! joined into one case-insensitive alternation, longest key first, so at any
//! position the longest available key wins. A single scan produces both the
//! plain and the highlighted rendering, which therefore always agree on which
//! spans changed and what they became.

use crate::matcher::MatchMap;
use regex::{Regex, RegexBuilder};

const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;
const HIGHLIGHT_CLOSE: &str = "</span>";

/// Markup wrapped around each substituted span in the highlighted rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarker {
    open: String,
    close: String,
}

impl HighlightMarker {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        HighlightMarker {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn wrap(&self, replacement: &str) -> String {
        format!("{}{}{}", self.open, replacement, self.close)
    }
}

impl Default for HighlightMarker {
    fn default() -> Self {
        HighlightMarker::new(HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE)
    }
}

/// Output of one substitution scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub plain: String,
    pub highlighted: String,
    /// Number of spans replaced
    pub substitutions: usize,
}

/// Compiled alternation over the keys of one [`MatchMap`]
#[derive(Debug)]
pub struct Substitution<'m> {
    matches: &'m MatchMap,
    pattern: Regex,
}

impl<'m> Substitution<'m> {
    pub fn new(matches: &'m MatchMap) -> Result<Self, regex::Error> {
        let mut keys: Vec<&String> = matches.keys().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;

        Ok(Substitution { matches, pattern })
    }

    /// Render `text` plainly and with `marker` around each replacement
    pub fn render(&self, text: &str, marker: &HighlightMarker) -> Rendered {
        let mut plain = String::with_capacity(text.len());
        let mut highlighted = String::with_capacity(text.len());
        let mut substitutions = 0;
        let mut last = 0;

        for found in self.pattern.find_iter(text) {
            let key = found.as_str().to_lowercase();
            let Some(replacement) = self.matches.replacement(&key) else {
                // Case folding can match a span whose lowercase form is not a key
                continue;
            };

            let unchanged = &text[last..found.start()];
            plain.push_str(unchanged);
            plain.push_str(replacement);
            highlighted.push_str(unchanged);
            highlighted.push_str(&marker.wrap(replacement));

            substitutions += 1;
            last = found.end();
        }

        plain.push_str(&text[last..]);
        highlighted.push_str(&text[last..]);

        Rendered {
            plain,
            highlighted,
            substitutions,
        }
    }
}
