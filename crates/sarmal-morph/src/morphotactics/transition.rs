// Transitions of the morphotactic graph: stem transitions out of the
// lexicon and suffix transitions between states.

use std::fmt;
use std::sync::{Arc, RwLock};

use hashbrown::HashMap;

use sarmal_core::alphabet::lower_char;
use sarmal_core::{PhoneticAttribute, PhoneticAttributeSet, TurkishAlphabet};

use crate::analysis::search_path::SearchPath;
use crate::lexicon::DictionaryItem;

use super::conditions::Condition;
use super::state::StateId;
use super::template::{tokenize, SuffixTemplateToken};

/// Index of a suffix transition in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(pub u32);

// ---------------------------------------------------------------------------
// Surface cache
// ---------------------------------------------------------------------------

/// Synthesized surfaces per attribute set. The attribute bit-set is the
/// canonical key; reads vastly outnumber writes once the cache warms up.
#[derive(Default)]
pub struct SurfaceCache {
    map: RwLock<HashMap<PhoneticAttributeSet, String>>,
}

impl SurfaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: PhoneticAttributeSet) -> Option<String> {
        match self.map.read() {
            Ok(map) => map.get(&key).cloned(),
            Err(_) => None,
        }
    }

    pub fn put(&self, key: PhoneticAttributeSet, surface: String) {
        if let Ok(mut map) = self.map.write() {
            map.insert(key, surface);
        }
    }
}

// ---------------------------------------------------------------------------
// Suffix transition
// ---------------------------------------------------------------------------

/// An edge between two graph states, carrying a suffix template and an
/// optional condition.
pub struct SuffixTransition {
    pub from: StateId,
    pub to: StateId,
    pub template: String,
    pub tokens: Vec<SuffixTemplateToken>,
    pub condition: Option<Condition>,
    pub condition_count: usize,
    pub cache: SurfaceCache,
}

impl SuffixTransition {
    /// Build a transition. Guards implied by the template shape are
    /// conjoined in front of the explicit condition.
    pub fn new(from: StateId, to: StateId, template: &str, condition: Option<Condition>) -> Self {
        let generated = conditions_from_template(template);
        let condition = match (generated, condition) {
            (Some(g), Some(c)) => Some(g.and(c)),
            (Some(g), None) => Some(g),
            (None, c) => c,
        };
        let condition_count = condition.as_ref().map_or(0, Condition::count);
        Self {
            from,
            to,
            template: template.to_string(),
            tokens: tokenize(template),
            condition,
            condition_count,
            cache: SurfaceCache::new(),
        }
    }

    /// Epsilon transitions have no template tokens.
    pub fn has_surface(&self) -> bool {
        !self.tokens.is_empty()
    }

    pub fn last_token(&self) -> Option<&SuffixTemplateToken> {
        self.tokens.last()
    }

    pub fn can_pass(&self, path: &SearchPath) -> bool {
        self.condition.as_ref().is_none_or(|c| c.accept(path))
    }
}

impl fmt::Debug for SuffixTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.template.is_empty() {
            write!(f, "[{:?}→{:?}]", self.from, self.to)
        } else {
            write!(f, "[{:?}→{:?}:{}]", self.from, self.to, self.template)
        }
    }
}

/// Guards implied by the template shape:
///
/// - a template starting with `>` or with a plain consonant cannot attach
///   where a vowel is expected;
/// - a template starting with a vowel, or with `+` whose third rune is a
///   vowel (`+yA`, `+yI`), cannot attach where a consonant is expected. A
///   `+` template needs that third rune for the guard to apply.
fn conditions_from_template(template: &str) -> Option<Condition> {
    if template.is_empty() {
        return None;
    }
    let alphabet = TurkishAlphabet::instance();
    let lower: Vec<char> = template.chars().map(lower_char).collect();
    let first = lower[0];
    let first_is_vowel = alphabet.is_vowel(first);

    let mut condition = None;
    if first == '>' || (first != '+' && !first_is_vowel) {
        condition = Some(Condition::not_have_phonetic(PhoneticAttribute::ExpectsVowel));
    }
    if first_is_vowel || (lower.len() >= 3 && first == '+' && alphabet.is_vowel(lower[2])) {
        let guard = Condition::not_have_phonetic(PhoneticAttribute::ExpectsConsonant);
        condition = Some(match condition {
            Some(existing) => existing.and(guard),
            None => guard,
        });
    }
    condition
}

// ---------------------------------------------------------------------------
// Stem transition
// ---------------------------------------------------------------------------

/// Entry edge from a lexicon root into the graph: the stem surface, its
/// phonetic attributes and the root state it leads to.
pub struct StemTransition {
    pub surface: String,
    pub item: Arc<DictionaryItem>,
    pub attributes: PhoneticAttributeSet,
    pub to: StateId,
}

impl StemTransition {
    pub fn new(
        surface: impl Into<String>,
        item: Arc<DictionaryItem>,
        attributes: PhoneticAttributeSet,
        to: StateId,
    ) -> Self {
        Self {
            surface: surface.into(),
            item,
            attributes,
            to,
        }
    }
}

impl fmt::Debug for StemTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[(Dict:{}):{} → {:?}]", self.item.id, self.surface, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(template: &str) -> SuffixTransition {
        SuffixTransition::new(StateId(0), StateId(1), template, None)
    }

    #[test]
    fn consonant_template_guards_against_expects_vowel() {
        let t = transition("lAr");
        assert_eq!(t.condition_count, 1);
        assert!(matches!(
            t.condition,
            Some(Condition::Not(ref inner))
                if matches!(**inner,
                    Condition::HasPhoneticAttribute(PhoneticAttribute::ExpectsVowel))
        ));
    }

    #[test]
    fn vowel_template_guards_against_expects_consonant() {
        let t = transition("Iyor");
        assert_eq!(t.condition_count, 1);
        assert!(matches!(
            t.condition,
            Some(Condition::Not(ref inner))
                if matches!(**inner,
                    Condition::HasPhoneticAttribute(PhoneticAttribute::ExpectsConsonant))
        ));
    }

    #[test]
    fn buffer_vowel_template_guards_against_expects_consonant_only() {
        // `+yA` may realize vowel-initial once the buffer `y` is skipped,
        // so it must stay attachable after a voiced stem expecting a vowel.
        let t = transition("+yA");
        assert_eq!(t.condition_count, 1);
        assert!(matches!(
            t.condition,
            Some(Condition::Not(ref inner))
                if matches!(**inner,
                    Condition::HasPhoneticAttribute(PhoneticAttribute::ExpectsConsonant))
        ));
    }

    #[test]
    fn buffer_consonant_template_gets_no_guard() {
        // `+` with a consonant third rune: neither guard applies.
        let t = transition("+ylA");
        assert!(t.condition.is_none());
        assert_eq!(t.condition_count, 0);
    }

    #[test]
    fn short_buffer_template_gets_no_guard() {
        // Two-rune `+` template: no third rune, no guard.
        let t = transition("+a");
        assert!(t.condition.is_none());
    }

    #[test]
    fn empty_template_is_epsilon() {
        let t = transition("");
        assert!(!t.has_surface());
        assert!(t.condition.is_none());
    }

    #[test]
    fn explicit_condition_is_kept_behind_the_guards() {
        let t = SuffixTransition::new(
            StateId(0),
            StateId(1),
            "lAr",
            Some(Condition::has_no_surface()),
        );
        assert_eq!(t.condition_count, 2);
    }

    #[test]
    fn surface_cache_round_trip() {
        let cache = SurfaceCache::new();
        let mut key = PhoneticAttributeSet::new();
        key.add(PhoneticAttribute::LastVowelBack);
        assert_eq!(cache.get(key), None);
        cache.put(key, "lar".to_string());
        assert_eq!(cache.get(key), Some("lar".to_string()));
    }
}
