//! Dual-indexed token registry for batch loads.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::token::Token;

/// Read-mostly registry resolving tokens by id and by name.
///
/// Built for the batch load path: definitions go in unvalidated, in
/// bulk, then the registry serves lookups while records stream. Each
/// index is last-write-wins on its own key.
///
/// # Invariant
///
/// Every slot held by either index is in bounds of `tokens`, and each
/// index entry points at the latest definition loaded for its key.
/// The two indexes move independently: conflicting definitions can
/// leave a name and an id resolving to different records, and lookups
/// simply report whatever each index holds.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    /// Every accepted definition, in load order. Shadowed definitions
    /// stay here so the other index can still reach them.
    tokens: Vec<Token>,
    name_index: FxHashMap<String, usize>,
    id_index: FxHashMap<u32, usize>,
}

impl TokenRegistry {
    /// A registry pre-loaded with `tokens`, in order.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut registry = TokenRegistry {
            tokens: Vec::with_capacity(tokens.len()),
            name_index: FxHashMap::default(),
            id_index: FxHashMap::default(),
        };
        for token in tokens {
            registry.add_token(token);
        }
        debug!(count = registry.tokens.len(), "token registry loaded");
        registry
    }

    /// Accept one definition, repointing both indexes at it.
    ///
    /// A token whose name or id is already bound shadows the earlier
    /// definition in that index only; the other index keeps resolving
    /// to whatever it last saw.
    pub fn add_token(&mut self, token: Token) {
        let slot = self.tokens.len();
        if let Some(prev) = self.name_index.insert(token.name().to_owned(), slot) {
            trace!(name = %token.name(), prev_slot = prev, slot, "token name rebound");
        }
        if let Some(prev) = self.id_index.insert(token.id(), slot) {
            trace!(id = token.id(), prev_slot = prev, slot, "token id rebound");
        }
        self.tokens.push(token);
    }

    /// The latest definition loaded under `id`, if any.
    #[inline]
    pub fn by_id(&self, id: u32) -> Option<&Token> {
        self.id_index.get(&id).map(|&slot| &self.tokens[slot])
    }

    /// The latest definition loaded under `name`, if any. Exact match.
    #[inline]
    pub fn by_name(&self, name: &str) -> Option<&Token> {
        self.name_index.get(name).map(|&slot| &self.tokens[slot])
    }

    /// How many definitions have been accepted, shadowed ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no definitions have been accepted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::registry::TokenRegistry;
    use crate::token::Token;

    #[test]
    fn test_bulk_load_resolves_both_ways() {
        let registry = TokenRegistry::new(vec![
            Token::new(0, "person"),
            Token::new(1, "knows"),
            Token::new(2, "since"),
        ]);

        assert_eq!(registry.by_id(1).map(Token::name), Some("knows"));
        assert_eq!(registry.by_name("since").map(Token::id), Some(2));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unknown_id_and_name_miss() {
        let registry = TokenRegistry::new(vec![Token::new(0, "person")]);

        assert_eq!(registry.by_id(99), None);
        assert_eq!(registry.by_name("city"), None);
    }

    #[test]
    fn test_same_name_rebinds_to_newest() {
        let mut registry = TokenRegistry::new(vec![Token::new(0, "dup")]);
        registry.add_token(Token::new(1, "dup"));

        assert_eq!(registry.by_name("dup").map(Token::id), Some(1));
        // The shadowed definition is still reachable through its id.
        assert_eq!(registry.by_id(0).map(Token::name), Some("dup"));
    }

    #[test]
    fn test_same_id_rebinds_to_newest() {
        let mut registry = TokenRegistry::new(vec![Token::new(0, "old")]);
        registry.add_token(Token::new(0, "new"));

        assert_eq!(registry.by_id(0).map(Token::name), Some("new"));
        // The shadowed definition is still reachable through its name.
        assert_eq!(registry.by_name("old").map(Token::id), Some(0));
    }

    #[test]
    fn test_conflicting_loads_leave_indexes_divergent() {
        // (0, "a") then (0, "b"): the id index follows the newer
        // definition while "a" keeps its original record.
        let registry = TokenRegistry::new(vec![Token::new(0, "a"), Token::new(0, "b")]);

        assert_eq!(registry.by_id(0).map(Token::name), Some("b"));
        assert_eq!(registry.by_name("a").map(Token::id), Some(0));
        assert_eq!(registry.by_name("b").map(Token::id), Some(0));
    }

    #[test]
    fn test_len_counts_shadowed_definitions() {
        let registry = TokenRegistry::new(vec![Token::new(0, "dup"), Token::new(1, "dup")]);

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(TokenRegistry::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let registry = TokenRegistry::new(vec![Token::new(0, "person")]);

        assert_eq!(registry.by_name("Person"), None);
        assert_eq!(registry.by_name("person "), None);
    }
}
