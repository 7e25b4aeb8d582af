// Phonetic attributes of a surface form and a small bit-set over them.

use std::fmt;

/// Phonetic properties computed from the runes of a surface form. Suffix
/// form selection (harmony, voicing, vowel/consonant expectations) is
/// driven entirely by these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PhoneticAttribute {
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
    LastLetterVoiced,
    LastLetterVoicelessStop,
    FirstLetterVowel,
    FirstLetterConsonant,
    HasNoVowel,
    /// The form ends mid-template and the next token must start with a vowel.
    ExpectsVowel,
    /// The form ends mid-template and the next token must start with a consonant.
    ExpectsConsonant,
    /// Surface was produced by an attached suffix (`+` token consumed).
    ModifiedPronoun,
    UnModifiedPronoun,
    /// Stem lost its last vowel (progressive vowel drop in flux).
    LastLetterDropped,
    /// The path cannot legally stop at this point.
    CannotTerminate,
}

impl PhoneticAttribute {
    const ALL: [PhoneticAttribute; 18] = [
        PhoneticAttribute::LastLetterVowel,
        PhoneticAttribute::LastLetterConsonant,
        PhoneticAttribute::LastVowelFrontal,
        PhoneticAttribute::LastVowelBack,
        PhoneticAttribute::LastVowelRounded,
        PhoneticAttribute::LastVowelUnrounded,
        PhoneticAttribute::LastLetterVoiceless,
        PhoneticAttribute::LastLetterVoiced,
        PhoneticAttribute::LastLetterVoicelessStop,
        PhoneticAttribute::FirstLetterVowel,
        PhoneticAttribute::FirstLetterConsonant,
        PhoneticAttribute::HasNoVowel,
        PhoneticAttribute::ExpectsVowel,
        PhoneticAttribute::ExpectsConsonant,
        PhoneticAttribute::ModifiedPronoun,
        PhoneticAttribute::UnModifiedPronoun,
        PhoneticAttribute::LastLetterDropped,
        PhoneticAttribute::CannotTerminate,
    ];

    /// Short form used in debug output.
    pub fn short(self) -> &'static str {
        match self {
            PhoneticAttribute::LastLetterVowel => "LLV",
            PhoneticAttribute::LastLetterConsonant => "LLC",
            PhoneticAttribute::LastVowelFrontal => "LVF",
            PhoneticAttribute::LastVowelBack => "LVB",
            PhoneticAttribute::LastVowelRounded => "LVR",
            PhoneticAttribute::LastVowelUnrounded => "LVuR",
            PhoneticAttribute::LastLetterVoiceless => "LLVless",
            PhoneticAttribute::LastLetterVoiced => "LLVo",
            PhoneticAttribute::LastLetterVoicelessStop => "LLVlessStop",
            PhoneticAttribute::FirstLetterVowel => "FLV",
            PhoneticAttribute::FirstLetterConsonant => "FLC",
            PhoneticAttribute::HasNoVowel => "NoVow",
            PhoneticAttribute::ExpectsVowel => "EV",
            PhoneticAttribute::ExpectsConsonant => "EC",
            PhoneticAttribute::ModifiedPronoun => "MP",
            PhoneticAttribute::UnModifiedPronoun => "UMP",
            PhoneticAttribute::LastLetterDropped => "LWD",
            PhoneticAttribute::CannotTerminate => "CNT",
        }
    }

    fn bit(self) -> u32 {
        1 << (self as u8)
    }
}

/// A set of [`PhoneticAttribute`] values packed into a `u32`.
///
/// `Copy + Eq + Hash`, so it doubles as the cache key for synthesized
/// suffix surfaces.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PhoneticAttributeSet(u32);

impl PhoneticAttributeSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn from_iter<I: IntoIterator<Item = PhoneticAttribute>>(iter: I) -> Self {
        let mut set = Self::new();
        for attr in iter {
            set.add(attr);
        }
        set
    }

    pub fn add(&mut self, attr: PhoneticAttribute) {
        self.0 |= attr.bit();
    }

    pub fn remove(&mut self, attr: PhoneticAttribute) {
        self.0 &= !attr.bit();
    }

    pub fn contains(&self, attr: PhoneticAttribute) -> bool {
        self.0 & attr.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = PhoneticAttribute> + '_ {
        PhoneticAttribute::ALL.into_iter().filter(|a| self.contains(*a))
    }

    /// Copy with one attribute added.
    pub fn with(mut self, attr: PhoneticAttribute) -> Self {
        self.add(attr);
        self
    }

    /// Copy with one attribute removed.
    pub fn without(mut self, attr: PhoneticAttribute) -> Self {
        self.remove(attr);
        self
    }
}

impl fmt::Debug for PhoneticAttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, attr) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(attr.short())?;
        }
        f.write_str("}")
    }
}

impl FromIterator<PhoneticAttribute> for PhoneticAttributeSet {
    fn from_iter<I: IntoIterator<Item = PhoneticAttribute>>(iter: I) -> Self {
        Self::from_iter(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove_contains() {
        let mut set = PhoneticAttributeSet::new();
        assert!(set.is_empty());
        set.add(PhoneticAttribute::LastLetterVowel);
        set.add(PhoneticAttribute::LastVowelBack);
        assert!(set.contains(PhoneticAttribute::LastLetterVowel));
        assert!(!set.contains(PhoneticAttribute::LastVowelFrontal));
        assert_eq!(set.len(), 2);
        set.remove(PhoneticAttribute::LastLetterVowel);
        assert!(!set.contains(PhoneticAttribute::LastLetterVowel));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn set_is_a_cache_key() {
        let a = PhoneticAttributeSet::from_iter([
            PhoneticAttribute::LastVowelBack,
            PhoneticAttribute::LastLetterConsonant,
        ]);
        let b = PhoneticAttributeSet::from_iter([
            PhoneticAttribute::LastLetterConsonant,
            PhoneticAttribute::LastVowelBack,
        ]);
        assert_eq!(a, b);
        let mut map = hashbrown::HashMap::new();
        map.insert(a, "dan");
        assert_eq!(map.get(&b), Some(&"dan"));
    }

    #[test]
    fn debug_uses_short_forms() {
        let set = PhoneticAttributeSet::from_iter([
            PhoneticAttribute::LastLetterVowel,
            PhoneticAttribute::CannotTerminate,
        ]);
        let printed = format!("{set:?}");
        assert!(printed.contains("LLV"));
        assert!(printed.contains("CNT"));
    }
}
