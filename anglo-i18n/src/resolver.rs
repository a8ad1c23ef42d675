//! Dialect resolution
//!
//! Turns the four source tables into what a single direction needs:
//!
//! | Direction           | Terms                                    | Titles           | Time  |
//! |---------------------|------------------------------------------|------------------|-------|
//! | American to British | American-only, spelling pairs overlaid   | titles           | Colon |
//! | British to American | British-only, reversed spelling overlaid | reversed titles  | Dot   |
//!
//! Both directions are resolved once when a [`DialectResolver`] is built.

use crate::dictionary::{DictionaryStore, PairTable, TermDictionary};
use crate::direction::Direction;
use crate::time::TimeFormat;
use tracing::debug;

/// Everything one translation direction reads
#[derive(Debug, Clone)]
pub struct ResolvedDialect {
    pub direction: Direction,
    pub terms: TermDictionary,
    pub titles: PairTable,
    pub time: TimeFormat,
}

impl ResolvedDialect {
    pub fn resolve(store: &DictionaryStore, direction: Direction) -> Self {
        let dialect = match direction {
            Direction::AmericanToBritish => ResolvedDialect {
                direction,
                terms: TermDictionary::merge(&store.american_only, &store.spelling),
                titles: store.titles.clone(),
                time: TimeFormat::Colon,
            },
            Direction::BritishToAmerican => ResolvedDialect {
                direction,
                terms: TermDictionary::merge(&store.british_only, &store.spelling.reversed()),
                titles: store.titles.reversed(),
                time: TimeFormat::Dot,
            },
        };

        debug!(
            %direction,
            terms = dialect.terms.len(),
            phrases = dialect.terms.phrases().len(),
            titles = dialect.titles.len(),
            "resolved dialect"
        );
        dialect
    }
}

/// Both directions, resolved up front
#[derive(Debug, Clone)]
pub struct DialectResolver {
    to_british: ResolvedDialect,
    to_american: ResolvedDialect,
}

impl DialectResolver {
    pub fn new(store: &DictionaryStore) -> Self {
        DialectResolver {
            to_british: ResolvedDialect::resolve(store, Direction::AmericanToBritish),
            to_american: ResolvedDialect::resolve(store, Direction::BritishToAmerican),
        }
    }

    pub fn resolve(&self, direction: Direction) -> &ResolvedDialect {
        match direction {
            Direction::AmericanToBritish => &self.to_british,
            Direction::BritishToAmerican => &self.to_american,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::TermTable;

    fn store() -> DictionaryStore {
        DictionaryStore::new(
            TermTable::new("american-only", [("parking lot", "car park"), ("color", "hue")])
                .unwrap(),
            TermTable::new("british-only", [("footie", "soccer")]).unwrap(),
            PairTable::new(
                "spelling",
                [("color", "colour"), ("favorite", "favourite")],
            )
            .unwrap(),
            PairTable::new("titles", [("mr.", "mr"), ("dr.", "dr")]).unwrap(),
        )
    }

    #[test]
    fn test_to_british() {
        let resolver = DialectResolver::new(&store());
        let dialect = resolver.resolve(Direction::AmericanToBritish);

        assert_eq!(dialect.direction, Direction::AmericanToBritish);
        assert_eq!(dialect.terms.get("parking lot").unwrap(), "car park");
        // Spelling pairs are merged second and win
        assert_eq!(dialect.terms.get("color").unwrap(), "colour");
        assert!(dialect.terms.get("footie").is_none());
        assert_eq!(dialect.titles.get("mr.").unwrap(), "mr");
        assert_eq!(dialect.time, TimeFormat::Colon);
    }

    #[test]
    fn test_to_american() {
        let resolver = DialectResolver::new(&store());
        let dialect = resolver.resolve(Direction::BritishToAmerican);

        assert_eq!(dialect.terms.get("footie").unwrap(), "soccer");
        assert_eq!(dialect.terms.get("favourite").unwrap(), "favorite");
        assert!(dialect.terms.get("favorite").is_none());
        assert!(dialect.terms.get("parking lot").is_none());
        assert_eq!(dialect.titles.get("dr").unwrap(), "dr.");
        assert_eq!(dialect.time, TimeFormat::Dot);
    }

    #[test]
    fn test_phrases_are_precomputed() {
        let resolver = DialectResolver::new(&store());
        let phrases = resolver.resolve(Direction::AmericanToBritish).terms.phrases();
        assert_eq!(phrases, &[("parking lot".to_string(), "car park".to_string())]);
        assert!(resolver.resolve(Direction::BritishToAmerican).terms.phrases().is_empty());
    }
}
