//! American/British translation entry point
//!
//! # Example
//!
//! ```ignore
//! use anglo_i18n::{Direction, Translation, Translator};
//!
//! let translator = Translator::builtin();
//! match translator.translate("Mangoes are my favorite fruit.", Direction::AmericanToBritish)? {
//!     Translation::Translated { plain, highlighted } => {
//!         assert_eq!(plain, "Mangoes are my favourite fruit.");
//!         println!("{}", highlighted);
//!     }
//!     Translation::NoMatch => println!("Everything looks good to me!"),
//! }
//! ```

use crate::dictionary::DictionaryStore;
use crate::direction::Direction;
use crate::error::{DictionaryResult, TranslateResult};
use crate::loader;
use crate::matcher::{self, MatchMap};
use crate::resolver::DialectResolver;
use crate::substitution::{HighlightMarker, Substitution};
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static BUILTIN: LazyLock<Translator> = LazyLock::new(|| {
    let store = DictionaryStore::builtin().expect("built-in dictionaries are valid");
    Translator::new(&store)
});

/// Outcome of a translation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Translation {
    /// Nothing in the text needed translating
    NoMatch,
    Translated {
        /// The translated text
        plain: String,
        /// The translated text with each substituted span wrapped in the highlight marker
        highlighted: String,
    },
}

impl Translation {
    pub fn is_no_match(&self) -> bool {
        matches!(self, Translation::NoMatch)
    }

    pub fn plain(&self) -> Option<&str> {
        match self {
            Translation::Translated { plain, .. } => Some(plain),
            Translation::NoMatch => None,
        }
    }

    pub fn highlighted(&self) -> Option<&str> {
        match self {
            Translation::Translated { highlighted, .. } => Some(highlighted),
            Translation::NoMatch => None,
        }
    }
}

/// Translates text between American and British English
///
/// Holds both resolved directions; it is immutable and can be shared across
/// threads freely.
#[derive(Debug, Clone)]
pub struct Translator {
    resolver: DialectResolver,
    marker: HighlightMarker,
}

impl Translator {
    pub fn new(store: &DictionaryStore) -> Self {
        Translator {
            resolver: DialectResolver::new(store),
            marker: HighlightMarker::default(),
        }
    }

    /// Shared translator over the built-in dictionaries
    pub fn builtin() -> &'static Translator {
        &BUILTIN
    }

    /// Translator over the dictionaries found in `dir`
    pub fn from_dir(dir: &Path) -> DictionaryResult<Self> {
        Ok(Translator::new(&loader::load_store_from_dir(dir)?))
    }

    pub fn with_highlight_marker(mut self, marker: HighlightMarker) -> Self {
        self.marker = marker;
        self
    }

    /// Every span of `text` that would be substituted in `direction`
    pub fn find_matches(&self, text: &str, direction: Direction) -> MatchMap {
        matcher::find_matches(&text.to_lowercase(), self.resolver.resolve(direction))
    }

    pub fn translate(&self, text: &str, direction: Direction) -> TranslateResult<Translation> {
        let matches = self.find_matches(text, direction);
        if matches.is_empty() {
            return Ok(Translation::NoMatch);
        }

        let rendered = Substitution::new(&matches)?.render(text, &self.marker);
        debug!(
            %direction,
            substitutions = rendered.substitutions,
            "translated text"
        );

        Ok(Translation::Translated {
            plain: rendered.plain,
            highlighted: rendered.highlighted,
        })
    }

    /// Translate with a direction given by name or locale tag
    pub fn translate_str(&self, text: &str, direction: &str) -> TranslateResult<Translation> {
        self.translate(text, direction.parse()?)
    }

    pub fn to_british_english(&self, text: &str) -> TranslateResult<Translation> {
        self.translate(text, Direction::AmericanToBritish)
    }

    pub fn to_american_english(&self, text: &str) -> TranslateResult<Translation> {
        self.translate(text, Direction::BritishToAmerican)
    }
}
