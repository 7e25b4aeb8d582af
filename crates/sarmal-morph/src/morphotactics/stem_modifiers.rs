// Modified stem generation for roots whose surface alternates before
// certain suffixes (kitap/kitab-, his/hiss-, burun/burn-, gel-/gid-).

use std::sync::Arc;

use sarmal_core::{PhoneticAttribute, PrimaryPos, RootAttribute, TurkishAlphabet};

use crate::analysis::phonetics::phonetic_attributes;
use crate::lexicon::DictionaryItem;

use super::state::StateId;
use super::transition::StemTransition;

/// Root attributes that require an alternative stem surface.
pub const MODIFIER_ATTRIBUTES: [RootAttribute; 5] = [
    RootAttribute::Voicing,
    RootAttribute::Doubling,
    RootAttribute::LastVowelDrop,
    RootAttribute::ProgressiveVowelDrop,
    RootAttribute::InverseHarmony,
];

pub fn has_modifier_attribute(item: &DictionaryItem) -> bool {
    MODIFIER_ATTRIBUTES.iter().any(|a| item.has_attribute(*a))
}

/// Generate stem transitions for an item with modifier attributes.
///
/// The original surface keeps the dictionary root; the modified surface is
/// derived from the pronunciation (or root) by applying each modifier.
/// Expectation markers steer which suffix shapes may attach to which
/// variant, and `CannotTerminate` keeps the bare modified stem from being
/// accepted as a word on its own. When modification turns out to be a
/// no-op, only the original transition is emitted.
pub fn generate(item: &Arc<DictionaryItem>, root_state: StateId) -> Vec<StemTransition> {
    let alphabet = TurkishAlphabet::instance();
    let base = if item.pronunciation.is_empty() {
        item.root.clone()
    } else {
        item.pronunciation.clone()
    };

    let mut modified: Vec<char> = base.chars().collect();
    let mut original_attrs = phonetic_attributes(&base);
    let mut modified_attrs = original_attrs;

    for attr in item.attributes.iter() {
        match attr {
            RootAttribute::Voicing => {
                if let Some(last) = modified.last_mut() {
                    // `-nk` voices to `-ng` (renk -> reng-), not `-nğ`.
                    *last = if base.ends_with("nk") {
                        'g'
                    } else {
                        alphabet.voice(*last)
                    };
                    modified_attrs.remove(PhoneticAttribute::LastLetterVoicelessStop);
                    original_attrs.add(PhoneticAttribute::ExpectsConsonant);
                    modified_attrs.add(PhoneticAttribute::ExpectsVowel);
                    modified_attrs.add(PhoneticAttribute::CannotTerminate);
                }
            }
            RootAttribute::Doubling => {
                if let Some(&last) = modified.last() {
                    modified.push(last);
                    original_attrs.add(PhoneticAttribute::ExpectsConsonant);
                    modified_attrs.add(PhoneticAttribute::ExpectsVowel);
                    modified_attrs.add(PhoneticAttribute::CannotTerminate);
                }
            }
            RootAttribute::LastVowelDrop => {
                if let Some(&last) = modified.last() {
                    if alphabet.is_vowel(last) {
                        modified.pop();
                        modified_attrs.add(PhoneticAttribute::ExpectsConsonant);
                        modified_attrs.add(PhoneticAttribute::CannotTerminate);
                    } else if modified.len() > 1 {
                        // Consonant-final root: the dropped vowel sits
                        // before the final consonant (burun -> burn).
                        modified.remove(modified.len() - 2);
                        if item.primary_pos != PrimaryPos::Verb {
                            original_attrs.add(PhoneticAttribute::ExpectsConsonant);
                        }
                        modified_attrs.add(PhoneticAttribute::ExpectsVowel);
                        modified_attrs.add(PhoneticAttribute::CannotTerminate);
                    }
                }
            }
            RootAttribute::ProgressiveVowelDrop => {
                if modified.len() > 1 {
                    modified.pop();
                    let shortened: String = modified.iter().collect();
                    if alphabet.contains_vowel(&shortened) {
                        modified_attrs = phonetic_attributes(&shortened);
                    }
                    modified_attrs.add(PhoneticAttribute::LastLetterDropped);
                }
            }
            RootAttribute::InverseHarmony => {
                original_attrs.add(PhoneticAttribute::LastVowelFrontal);
                original_attrs.remove(PhoneticAttribute::LastVowelBack);
                modified_attrs.add(PhoneticAttribute::LastVowelFrontal);
                modified_attrs.remove(PhoneticAttribute::LastVowelBack);
            }
            _ => {}
        }
    }

    let original = StemTransition::new(
        item.root.clone(),
        item.clone(),
        original_attrs,
        root_state,
    );

    let modified_surface: String = modified.into_iter().collect();
    if modified_surface == item.root {
        return vec![original];
    }

    let modified = StemTransition::new(modified_surface, item.clone(), modified_attrs, root_state);
    vec![original, modified]
}
