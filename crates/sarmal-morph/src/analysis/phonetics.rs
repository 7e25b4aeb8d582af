// Phonetic attribute computation for surface sequences.

use sarmal_core::{PhoneticAttribute, PhoneticAttributeSet, TurkishAlphabet};

/// Compute the phonetic attributes of `seq` as continued from a
/// predecessor attribute set.
///
/// A sequence with a vowel determines its attributes alone. A vowel-free
/// sequence inherits the predecessor's vowel attributes: phonologically it
/// extends the previous syllable, so only the consonant-related tags are
/// replaced. An empty sequence is transparent.
pub fn morphemic_attributes(
    seq: &str,
    predecessor: PhoneticAttributeSet,
) -> PhoneticAttributeSet {
    if seq.is_empty() {
        return predecessor;
    }

    let alphabet = TurkishAlphabet::instance();
    let mut attrs = PhoneticAttributeSet::new();
    let last = alphabet.get_last_letter(seq);

    if alphabet.contains_vowel(seq) {
        if last.is_vowel() {
            attrs.add(PhoneticAttribute::LastLetterVowel);
        } else {
            attrs.add(PhoneticAttribute::LastLetterConsonant);
        }

        let last_vowel = if last.is_vowel() {
            last
        } else {
            alphabet.get_last_vowel(seq)
        };
        if last_vowel.is_frontal() {
            attrs.add(PhoneticAttribute::LastVowelFrontal);
        } else {
            attrs.add(PhoneticAttribute::LastVowelBack);
        }
        if last_vowel.is_rounded() {
            attrs.add(PhoneticAttribute::LastVowelRounded);
        } else {
            attrs.add(PhoneticAttribute::LastVowelUnrounded);
        }

        if alphabet.get_first_letter(seq).is_vowel() {
            attrs.add(PhoneticAttribute::FirstLetterVowel);
        } else {
            attrs.add(PhoneticAttribute::FirstLetterConsonant);
        }
    } else {
        attrs = predecessor;
        attrs.add(PhoneticAttribute::LastLetterConsonant);
        attrs.add(PhoneticAttribute::FirstLetterConsonant);
        attrs.add(PhoneticAttribute::HasNoVowel);
        attrs.remove(PhoneticAttribute::LastLetterVowel);
        attrs.remove(PhoneticAttribute::ExpectsConsonant);
    }

    if last.is_voiceless() {
        attrs.add(PhoneticAttribute::LastLetterVoiceless);
        if last.is_stop_consonant() {
            attrs.add(PhoneticAttribute::LastLetterVoicelessStop);
        }
    } else {
        attrs.add(PhoneticAttribute::LastLetterVoiced);
    }

    attrs
}

/// Attributes of a stand-alone sequence (no predecessor).
pub fn phonetic_attributes(seq: &str) -> PhoneticAttributeSet {
    morphemic_attributes(seq, PhoneticAttributeSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use PhoneticAttribute as A;

    #[test]
    fn back_unrounded_consonant_final() {
        let attrs = phonetic_attributes("kitap");
        assert!(attrs.contains(A::LastLetterConsonant));
        assert!(attrs.contains(A::LastVowelBack));
        assert!(attrs.contains(A::LastVowelUnrounded));
        assert!(attrs.contains(A::FirstLetterConsonant));
        assert!(attrs.contains(A::LastLetterVoiceless));
        assert!(attrs.contains(A::LastLetterVoicelessStop));
        assert!(!attrs.contains(A::LastLetterVowel));
    }

    #[test]
    fn frontal_rounded_vowel_final() {
        let attrs = phonetic_attributes("ütü");
        assert!(attrs.contains(A::LastLetterVowel));
        assert!(attrs.contains(A::LastVowelFrontal));
        assert!(attrs.contains(A::LastVowelRounded));
        assert!(attrs.contains(A::FirstLetterVowel));
        assert!(attrs.contains(A::LastLetterVoiced));
    }

    #[test]
    fn voiceless_continuant_is_not_a_stop() {
        let attrs = phonetic_attributes("kış");
        assert!(attrs.contains(A::LastLetterVoiceless));
        assert!(!attrs.contains(A::LastLetterVoicelessStop));
    }

    #[test]
    fn vowel_free_sequence_inherits_predecessor() {
        let stem = phonetic_attributes("gid");
        let attrs = morphemic_attributes("m", stem);
        // Vowel attributes carry over from `gid`.
        assert!(attrs.contains(A::LastVowelFrontal));
        assert!(attrs.contains(A::LastVowelUnrounded));
        assert!(attrs.contains(A::HasNoVowel));
        assert!(attrs.contains(A::LastLetterConsonant));
        assert!(!attrs.contains(A::LastLetterVowel));
    }

    #[test]
    fn vowel_free_sequence_clears_expects_consonant() {
        let mut stem = phonetic_attributes("kitab");
        stem.add(A::ExpectsVowel);
        stem.add(A::ExpectsConsonant);
        let attrs = morphemic_attributes("m", stem);
        assert!(!attrs.contains(A::ExpectsConsonant));
        // ExpectsVowel is untouched by this branch.
        assert!(attrs.contains(A::ExpectsVowel));
    }

    #[test]
    fn empty_sequence_is_transparent() {
        let stem = phonetic_attributes("ev");
        assert_eq!(morphemic_attributes("", stem), stem);
    }

    #[test]
    fn vowel_bearing_sequence_discards_predecessor() {
        let mut stem = phonetic_attributes("kitap");
        stem.add(A::CannotTerminate);
        let attrs = morphemic_attributes("ler", stem);
        assert!(attrs.contains(A::LastVowelFrontal));
        assert!(!attrs.contains(A::LastVowelBack));
        assert!(!attrs.contains(A::CannotTerminate));
    }
}
