// Morpheme identity records. Shared via `Arc` between graph states,
// path nodes and analysis results; identity is the `id` string.

use std::fmt;
use std::sync::{Arc, OnceLock};

use sarmal_core::PrimaryPos;

/// A morpheme of the suffix inventory, e.g. `A3pl` or `Dim`.
pub struct Morpheme {
    pub name: &'static str,
    pub id: &'static str,
    /// Set for the part-of-speech root morphemes (Noun, Verb, ...).
    pub pos: Option<PrimaryPos>,
    pub derivational: bool,
    pub informal: bool,
    /// For informal morphemes, the formal morpheme they map to.
    pub mapped: Option<Arc<Morpheme>>,
}

impl Morpheme {
    pub fn new(name: &'static str, id: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            id,
            pos: None,
            derivational: false,
            informal: false,
            mapped: None,
        })
    }

    pub fn with_pos(name: &'static str, id: &'static str, pos: PrimaryPos) -> Arc<Self> {
        Arc::new(Self {
            name,
            id,
            pos: Some(pos),
            derivational: false,
            informal: false,
            mapped: None,
        })
    }

    pub fn derivational(name: &'static str, id: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            id,
            pos: None,
            derivational: true,
            informal: false,
            mapped: None,
        })
    }

    /// The sentinel morpheme used for unanalyzable input.
    pub fn unknown() -> Arc<Morpheme> {
        static UNKNOWN: OnceLock<Arc<Morpheme>> = OnceLock::new();
        UNKNOWN.get_or_init(|| Morpheme::new("Unknown", "Unknown")).clone()
    }
}

impl PartialEq for Morpheme {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Morpheme {}

impl fmt::Debug for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.id)
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.id)
    }
}
