// Turkic letter table entry.

/// A letter of the Turkish alphabet together with the phonological
/// attributes that drive vowel harmony and consonant alternation.
///
/// Instances are owned by the [`TurkishAlphabet`](crate::TurkishAlphabet)
/// table; one entry exists per recognized rune (both cases).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurkicLetter {
    pub ch: char,
    pub vowel: bool,
    pub frontal: bool,
    pub rounded: bool,
    pub voiceless: bool,
    pub continuant: bool,
}

/// Sentinel for runes the alphabet does not classify.
pub const UNDEFINED: TurkicLetter = TurkicLetter::new('\0', false, false, false, false, false);

impl TurkicLetter {
    pub const fn new(
        ch: char,
        vowel: bool,
        frontal: bool,
        rounded: bool,
        voiceless: bool,
        continuant: bool,
    ) -> Self {
        Self { ch, vowel, frontal, rounded, voiceless, continuant }
    }

    pub fn is_vowel(&self) -> bool {
        self.vowel
    }

    pub fn is_consonant(&self) -> bool {
        !self.vowel
    }

    pub fn is_frontal(&self) -> bool {
        self.frontal
    }

    pub fn is_rounded(&self) -> bool {
        self.rounded
    }

    pub fn is_voiceless(&self) -> bool {
        self.voiceless
    }

    /// A stop consonant is voiceless and not continuant (ç, k, p, t).
    pub fn is_stop_consonant(&self) -> bool {
        self.voiceless && !self.continuant
    }

    /// Same attributes, different rune. Used to derive the capital table.
    pub fn copy_for(&self, ch: char) -> Self {
        Self { ch, ..*self }
    }

    pub fn is_undefined(&self) -> bool {
        self.ch == '\0'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_consonant_requires_voiceless_non_continuant() {
        let k = TurkicLetter::new('k', false, false, false, true, false);
        let s = TurkicLetter::new('s', false, false, false, true, true);
        let l = TurkicLetter::new('l', false, false, false, false, true);
        assert!(k.is_stop_consonant());
        assert!(!s.is_stop_consonant());
        assert!(!l.is_stop_consonant());
    }

    #[test]
    fn copy_for_keeps_attributes() {
        let i = TurkicLetter::new('i', true, true, false, false, false);
        let cap = i.copy_for('İ');
        assert_eq!(cap.ch, 'İ');
        assert!(cap.is_vowel());
        assert!(cap.is_frontal());
        assert!(!cap.is_rounded());
    }

    #[test]
    fn undefined_sentinel() {
        assert!(UNDEFINED.is_undefined());
        assert!(UNDEFINED.is_consonant());
        assert!(!UNDEFINED.is_stop_consonant());
    }
}
