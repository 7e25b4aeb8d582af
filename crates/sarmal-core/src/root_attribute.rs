// Lexical attributes carried by dictionary roots.

use std::fmt;
use std::str::FromStr;

/// Attributes of a dictionary root that steer surface alternation and
/// morphotactic wiring. Parsed from the `A:` section of a dictionary line
/// or inferred from the root's phonology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RootAttribute {
    AoristI,
    AoristA,
    /// Verb drops its last vowel before `Iyor` (de- -> d-iyor).
    ProgressiveVowelDrop,
    PassiveIn,
    CausativeT,
    /// Final stop voices before a vowel (kitap -> kitab-).
    Voicing,
    NoVoicing,
    /// Suffix vowels harmonize as if the last vowel were frontal (saat -> saate).
    InverseHarmony,
    /// Final consonant doubles before a vowel (hak -> hakk-).
    Doubling,
    /// Last vowel drops before a vowel-initial suffix (burun -> burn-).
    LastVowelDrop,
    CompoundP3sg,
    NoSuffix,
    NounConsInsertN,
    NoQuote,
    CompoundP3sgRoot,
    Reflexive,
    Reciprocal,
    NonReciprocal,
    Ext,
    Runtime,
    /// Synthetic item generated for a modified stem; points at the real root.
    Dummy,
    ImplicitDative,
    ImplicitPlural,
    ImplicitP1sg,
    ImplicitP2sg,
    FamilyMember,
    PronunciationGuessed,
    Informal,
    LocaleEn,
    Unknown,
}

impl RootAttribute {
    const ALL: [RootAttribute; 30] = [
        RootAttribute::AoristI,
        RootAttribute::AoristA,
        RootAttribute::ProgressiveVowelDrop,
        RootAttribute::PassiveIn,
        RootAttribute::CausativeT,
        RootAttribute::Voicing,
        RootAttribute::NoVoicing,
        RootAttribute::InverseHarmony,
        RootAttribute::Doubling,
        RootAttribute::LastVowelDrop,
        RootAttribute::CompoundP3sg,
        RootAttribute::NoSuffix,
        RootAttribute::NounConsInsertN,
        RootAttribute::NoQuote,
        RootAttribute::CompoundP3sgRoot,
        RootAttribute::Reflexive,
        RootAttribute::Reciprocal,
        RootAttribute::NonReciprocal,
        RootAttribute::Ext,
        RootAttribute::Runtime,
        RootAttribute::Dummy,
        RootAttribute::ImplicitDative,
        RootAttribute::ImplicitPlural,
        RootAttribute::ImplicitP1sg,
        RootAttribute::ImplicitP2sg,
        RootAttribute::FamilyMember,
        RootAttribute::PronunciationGuessed,
        RootAttribute::Informal,
        RootAttribute::LocaleEn,
        RootAttribute::Unknown,
    ];

    /// The canonical dictionary-text spelling of the attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            RootAttribute::AoristI => "Aorist_I",
            RootAttribute::AoristA => "Aorist_A",
            RootAttribute::ProgressiveVowelDrop => "ProgressiveVowelDrop",
            RootAttribute::PassiveIn => "Passive_In",
            RootAttribute::CausativeT => "Causative_t",
            RootAttribute::Voicing => "Voicing",
            RootAttribute::NoVoicing => "NoVoicing",
            RootAttribute::InverseHarmony => "InverseHarmony",
            RootAttribute::Doubling => "Doubling",
            RootAttribute::LastVowelDrop => "LastVowelDrop",
            RootAttribute::CompoundP3sg => "CompoundP3sg",
            RootAttribute::NoSuffix => "NoSuffix",
            RootAttribute::NounConsInsertN => "NounConsInsert_n",
            RootAttribute::NoQuote => "NoQuote",
            RootAttribute::CompoundP3sgRoot => "CompoundP3sgRoot",
            RootAttribute::Reflexive => "Reflexive",
            RootAttribute::Reciprocal => "Reciprocal",
            RootAttribute::NonReciprocal => "NonReciprocal",
            RootAttribute::Ext => "Ext",
            RootAttribute::Runtime => "Runtime",
            RootAttribute::Dummy => "Dummy",
            RootAttribute::ImplicitDative => "ImplicitDative",
            RootAttribute::ImplicitPlural => "ImplicitPlural",
            RootAttribute::ImplicitP1sg => "ImplicitP1sg",
            RootAttribute::ImplicitP2sg => "ImplicitP2sg",
            RootAttribute::FamilyMember => "FamilyMember",
            RootAttribute::PronunciationGuessed => "PronunciationGuessed",
            RootAttribute::Informal => "Informal",
            RootAttribute::LocaleEn => "LocaleEn",
            RootAttribute::Unknown => "Unknown",
        }
    }

    fn bit(self) -> u32 {
        1 << (self as u8)
    }
}

impl fmt::Display for RootAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced when a dictionary line names an attribute we do not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRootAttribute(pub String);

impl fmt::Display for UnknownRootAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown root attribute `{}`", self.0)
    }
}

impl std::error::Error for UnknownRootAttribute {}

impl FromStr for RootAttribute {
    type Err = UnknownRootAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RootAttribute::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownRootAttribute(s.to_string()))
    }
}

/// A set of [`RootAttribute`] values packed into a `u32`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RootAttributeSet(u32);

impl RootAttributeSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn from_iter<I: IntoIterator<Item = RootAttribute>>(iter: I) -> Self {
        let mut set = Self::new();
        for attr in iter {
            set.add(attr);
        }
        set
    }

    pub fn add(&mut self, attr: RootAttribute) {
        self.0 |= attr.bit();
    }

    pub fn remove(&mut self, attr: RootAttribute) {
        self.0 &= !attr.bit();
    }

    pub fn contains(&self, attr: RootAttribute) -> bool {
        self.0 & attr.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = RootAttribute> + '_ {
        RootAttribute::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

impl fmt::Debug for RootAttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, attr) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(attr.as_str())?;
        }
        f.write_str("}")
    }
}

impl FromIterator<RootAttribute> for RootAttributeSet {
    fn from_iter<I: IntoIterator<Item = RootAttribute>>(iter: I) -> Self {
        Self::from_iter(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for attr in RootAttribute::ALL {
            assert_eq!(attr.as_str().parse::<RootAttribute>(), Ok(attr));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("Bogus".parse::<RootAttribute>().is_err());
    }

    #[test]
    fn set_operations() {
        let mut set = RootAttributeSet::new();
        set.add(RootAttribute::Voicing);
        set.add(RootAttribute::Doubling);
        assert!(set.contains(RootAttribute::Voicing));
        assert!(!set.contains(RootAttribute::NoVoicing));
        assert_eq!(set.len(), 2);
        set.remove(RootAttribute::Voicing);
        assert!(!set.contains(RootAttribute::Voicing));
    }
}
