// Surface realization of suffix templates against the phonetic
// attributes of the material preceding them.

use std::sync::Arc;

use sarmal_core::{PhoneticAttribute, PhoneticAttributeSet, TurkishAlphabet};

use crate::morphotactics::template::SuffixTemplateToken;
use crate::morphotactics::{Morpheme, StateId, SuffixTransition};

use super::phonetics::morphemic_attributes;

/// One realized step of a search path: a stem or suffix surface together
/// with the graph state it landed on. Carries copies of the state's
/// morpheme and derivative flag so conditions can evaluate a path without
/// reaching back into the graph.
#[derive(Debug, Clone)]
pub struct SurfaceTransition {
    pub surface: String,
    pub state: StateId,
    pub morpheme: Arc<Morpheme>,
    pub derivative: bool,
}

impl SurfaceTransition {
    pub fn new(
        surface: String,
        state: StateId,
        morpheme: Arc<Morpheme>,
        derivative: bool,
    ) -> Self {
        Self {
            surface,
            state,
            morpheme,
            derivative,
        }
    }
}

impl std::fmt::Display for SurfaceTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.surface.is_empty() {
            write!(f, "{}", self.morpheme.id)
        } else {
            write!(f, "{}:{}", self.surface, self.morpheme.id)
        }
    }
}

/// Realizes a suffix template against the attributes of what precedes it.
/// Results are memoized per attribute set on the transition itself.
pub fn generate_surface(
    transition: &SuffixTransition,
    predecessor: PhoneticAttributeSet,
) -> String {
    if let Some(cached) = transition.cache.get(predecessor) {
        return cached;
    }

    let alphabet = TurkishAlphabet::instance();
    let mut result = String::new();

    for (index, token) in transition.tokens.iter().enumerate() {
        // Attributes of the partially built surface, seeded from the
        // predecessor while the surface is still empty.
        let attrs = morphemic_attributes(&result, predecessor);
        match *token {
            SuffixTemplateToken::Letter(ch) => result.push(ch),
            SuffixTemplateToken::AVowel { .. } => {
                // A leading vowel elides after a vowel-final predecessor.
                if index == 0 && predecessor.contains(PhoneticAttribute::LastLetterVowel) {
                    continue;
                }
                if attrs.contains(PhoneticAttribute::LastVowelBack) {
                    result.push('a');
                } else if attrs.contains(PhoneticAttribute::LastVowelFrontal) {
                    result.push('e');
                }
            }
            SuffixTemplateToken::IVowel { .. } => {
                if index == 0 && predecessor.contains(PhoneticAttribute::LastLetterVowel) {
                    continue;
                }
                let rounded = attrs.contains(PhoneticAttribute::LastVowelRounded);
                if attrs.contains(PhoneticAttribute::LastVowelFrontal) {
                    result.push(if rounded { 'ü' } else { 'i' });
                } else if attrs.contains(PhoneticAttribute::LastVowelBack) {
                    result.push(if rounded { 'u' } else { 'ı' });
                }
            }
            SuffixTemplateToken::Append(ch) => {
                if attrs.contains(PhoneticAttribute::LastLetterVowel) {
                    result.push(ch);
                }
            }
            SuffixTemplateToken::DevoiceFirst(ch) => {
                if attrs.contains(PhoneticAttribute::LastLetterVoiceless) {
                    result.push(alphabet.devoice(ch));
                } else {
                    result.push(ch);
                }
            }
            SuffixTemplateToken::LastVoiced(ch) | SuffixTemplateToken::LastNotVoiced(ch) => {
                result.push(ch)
            }
        }
    }

    transition.cache.put(predecessor, result.clone());
    result
}
