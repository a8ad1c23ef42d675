//! American and British English dialect translation
//!
//! Substitutes dialect-specific vocabulary, honorific titles and clock-time
//! notation, and produces a second rendering with every substituted span
//! wrapped in a highlight marker.
//!
//! # Workflow Example
//!
//! ```ignore
//! use anglo_i18n::{Direction, Translator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = Translator::builtin();
//!     let result =
//!         translator.translate("Lunch is at 12:15 today.", Direction::AmericanToBritish)?;
//!     assert_eq!(result.plain(), Some("Lunch is at 12.15 today."));
//!     Ok(())
//! }
//! ```

pub mod dictionary;
pub mod direction;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod resolver;
pub mod substitution;
pub mod time;
pub mod translator;


pub use dictionary::{DictionaryStore, PairTable, TermDictionary, TermTable};
pub use direction::Direction;
pub use error::{DictionaryError, DictionaryResult, TranslateError, TranslateResult};
pub use loader::{load_entries_from_file, load_store_from_dir};
pub use matcher::{Match, MatchMap, MatchPass, PASS_ORDER, find_matches};
pub use resolver::{DialectResolver, ResolvedDialect};
pub use substitution::{HighlightMarker, Rendered, Substitution};
pub use time::TimeFormat;
pub use translator::{Translation, Translator};
