//! The static morphotactic layer: morphemes, graph states, suffix
//! templates, transition conditions and stem transitions.

pub mod conditions;
pub mod graph;
pub mod morpheme;
pub mod state;
pub mod stem_modifiers;
pub mod template;
pub mod transition;

pub use conditions::Condition;
pub use graph::TurkishMorphotactics;
pub use morpheme::Morpheme;
pub use state::{MorphemeState, StateId};
pub use transition::{StemTransition, SuffixTransition, TransitionId};
