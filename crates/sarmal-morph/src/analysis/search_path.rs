// A partial analysis: the stem and suffixes consumed so far, the graph
// state reached, and the attributes governing the next suffix surface.

use std::fmt;
use std::sync::Arc;

use sarmal_core::PhoneticAttributeSet;

use crate::lexicon::DictionaryItem;
use crate::morphotactics::{Morpheme, MorphemeState, StateId, StemTransition};

use super::surface::SurfaceTransition;

#[derive(Debug, Clone)]
pub struct SearchPath {
    tail: String,
    current_state: StateId,
    terminal: bool,
    nodes: Vec<SurfaceTransition>,
    item: Arc<DictionaryItem>,
    attributes: PhoneticAttributeSet,
    contains_derivation: bool,
    contains_suffix_with_surface: bool,
}

impl SearchPath {
    /// Seeds a path from a matched stem transition. `tail` is the input
    /// remaining after the stem surface.
    pub fn initial(stem: &StemTransition, tail: &str, state: &MorphemeState) -> SearchPath {
        let root = SurfaceTransition::new(
            stem.surface.clone(),
            stem.to,
            state.morpheme.clone(),
            state.derivative,
        );
        SearchPath {
            tail: tail.to_string(),
            current_state: stem.to,
            terminal: state.terminal,
            nodes: vec![root],
            item: stem.item.clone(),
            attributes: stem.attributes,
            contains_derivation: false,
            contains_suffix_with_surface: false,
        }
    }

    /// Extends the path with one suffix node, consuming the node surface
    /// from the tail. Shortening counts runes, not bytes, so an
    /// ASCII-tolerant match of a multi-byte surface stays aligned.
    pub fn advance(
        &self,
        surface: String,
        state_id: StateId,
        state: &MorphemeState,
        attributes: PhoneticAttributeSet,
    ) -> SearchPath {
        let consumed = surface.chars().count();
        let tail: String = self.tail.chars().skip(consumed).collect();

        let node = SurfaceTransition::new(surface, state_id, state.morpheme.clone(), state.derivative);
        let mut nodes = self.nodes.clone();
        let has_surface = !node.surface.is_empty();
        nodes.push(node);

        SearchPath {
            tail,
            current_state: state_id,
            terminal: state.terminal,
            nodes,
            item: self.item.clone(),
            attributes,
            contains_derivation: self.contains_derivation || state.derivative,
            contains_suffix_with_surface: self.contains_suffix_with_surface || has_surface,
        }
    }

    pub fn tail(&self) -> &str {
        &self.tail
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn nodes(&self) -> &[SurfaceTransition] {
        &self.nodes
    }

    pub fn item(&self) -> &Arc<DictionaryItem> {
        &self.item
    }

    pub fn attributes(&self) -> PhoneticAttributeSet {
        self.attributes
    }

    pub fn contains_derivation(&self) -> bool {
        self.contains_derivation
    }

    pub fn contains_suffix_with_surface(&self) -> bool {
        self.contains_suffix_with_surface
    }

    /// Morpheme of the node before the current one.
    pub fn previous_morpheme(&self) -> Option<&Arc<Morpheme>> {
        if self.nodes.len() < 2 {
            return None;
        }
        Some(&self.nodes[self.nodes.len() - 2].morpheme)
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[({})(-{}) ", self.item.id, self.tail)?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::phonetics::phonetic_attributes;
    use sarmal_core::PhoneticAttribute;

    fn stem(word: &str) -> (StemTransition, MorphemeState) {
        let item = Arc::new(DictionaryItem::parse(word, 0).unwrap());
        let stem = StemTransition::new(
            word.to_string(),
            item,
            phonetic_attributes(word),
            StateId(0),
        );
        let state = MorphemeState::new(
            "noun_S",
            Morpheme::with_pos("Noun", "Noun", sarmal_core::PrimaryPos::Noun),
            false,
            false,
            true,
        );
        (stem, state)
    }

    #[test]
    fn initial_path_copies_stem_attributes() {
        let (st, state) = stem("kitap");
        let path = SearchPath::initial(&st, "lar", &state);
        assert_eq!(path.tail(), "lar");
        assert!(!path.is_terminal());
        assert!(path.attributes().contains(PhoneticAttribute::LastLetterVoiceless));
        assert_eq!(path.nodes().len(), 1);
        assert!(path.previous_morpheme().is_none());
    }

    #[test]
    fn advance_consumes_tail_by_runes() {
        let (st, state) = stem("kişi");
        let path = SearchPath::initial(&st, "şiler", &state);
        let next_state = MorphemeState::new(
            "a3pl_S",
            Morpheme::new("ThirdPersonPlural", "A3pl"),
            false,
            false,
            false,
        );
        // Surface with a multi-byte rune shortens the tail by two runes.
        let next = path.advance(
            "şi".to_string(),
            StateId(1),
            &next_state,
            path.attributes(),
        );
        assert_eq!(next.tail(), "ler");
        assert!(next.contains_suffix_with_surface());
        assert_eq!(next.previous_morpheme().map(|m| m.id), Some("Noun"));
    }

    #[test]
    fn empty_surface_does_not_mark_suffix_surface() {
        let (st, state) = stem("ev");
        let path = SearchPath::initial(&st, "", &state);
        let next_state = MorphemeState::new(
            "a3sg_S",
            Morpheme::new("ThirdPersonSingular", "A3sg"),
            false,
            false,
            false,
        );
        let next = path.advance(String::new(), StateId(1), &next_state, path.attributes());
        assert_eq!(next.tail(), "");
        assert!(!next.contains_suffix_with_surface());
        assert!(!next.contains_derivation());
    }
}
