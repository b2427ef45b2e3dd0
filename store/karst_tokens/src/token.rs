//! The token definition record.

/// A named token definition: a label, relationship type, or property
/// key as loaded from the store.
///
/// `id` is the store-assigned numeric handle; `name` is the
/// user-visible string. Identity for equality purposes is the id
/// alone: two definitions with the same id compare equal even when
/// their names differ. Uniqueness is still the registry's business.
#[derive(Debug, Clone)]
pub struct Token {
    id: u32,
    name: String,
}

impl PartialEq for Token {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Token {}

/// Size assertion: Token should be <= 32 bytes on 64-bit platforms.
/// String = 24, u32 = 4, padding => 32 bytes.
const _: () = assert!(std::mem::size_of::<Token>() <= 32);

impl Token {
    /// A token definition with the given id and name.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Token {
            id,
            name: name.into(),
        }
    }

    /// The store-assigned numeric handle.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The user-visible name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}
