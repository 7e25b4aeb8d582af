// Graph states. States live in an arena inside the graph and refer to
// each other through transition ids, which keeps the cyclic graph in
// plain owned storage.

use std::fmt;
use std::sync::Arc;

use super::morpheme::Morpheme;
use super::transition::TransitionId;

/// Index of a state in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub u16);

/// A node of the morphotactic graph.
///
/// `terminal` states may end an analysis; `derivative` states start a new
/// inflection group; `pos_root` states are entry points for dictionary
/// roots of a part of speech.
pub struct MorphemeState {
    pub id: &'static str,
    pub morpheme: Arc<Morpheme>,
    pub terminal: bool,
    pub derivative: bool,
    pub pos_root: bool,
    pub outgoing: Vec<TransitionId>,
    pub incoming: Vec<TransitionId>,
}

impl MorphemeState {
    pub fn new(
        id: &'static str,
        morpheme: Arc<Morpheme>,
        terminal: bool,
        derivative: bool,
        pos_root: bool,
    ) -> Self {
        Self {
            id,
            morpheme,
            terminal,
            derivative,
            pos_root,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }
}

impl fmt::Debug for MorphemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.id, self.morpheme.id)
    }
}
