// Part-of-speech tags, with the short forms used in dictionary text and
// analysis output.

use std::fmt;
use std::str::FromStr;

/// Primary part-of-speech of a dictionary root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PrimaryPos {
    #[default]
    Noun,
    Adjective,
    Adverb,
    Conjunction,
    Interjection,
    Verb,
    Pronoun,
    Numeral,
    Determiner,
    PostPositive,
    Question,
    Duplicator,
    Punctuation,
    Unknown,
}

impl PrimaryPos {
    const ALL: [PrimaryPos; 14] = [
        PrimaryPos::Noun,
        PrimaryPos::Adjective,
        PrimaryPos::Adverb,
        PrimaryPos::Conjunction,
        PrimaryPos::Interjection,
        PrimaryPos::Verb,
        PrimaryPos::Pronoun,
        PrimaryPos::Numeral,
        PrimaryPos::Determiner,
        PrimaryPos::PostPositive,
        PrimaryPos::Question,
        PrimaryPos::Duplicator,
        PrimaryPos::Punctuation,
        PrimaryPos::Unknown,
    ];

    /// Short form used in dictionary text and item ids.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimaryPos::Noun => "Noun",
            PrimaryPos::Adjective => "Adj",
            PrimaryPos::Adverb => "Adv",
            PrimaryPos::Conjunction => "Conj",
            PrimaryPos::Interjection => "Interj",
            PrimaryPos::Verb => "Verb",
            PrimaryPos::Pronoun => "Pron",
            PrimaryPos::Numeral => "Num",
            PrimaryPos::Determiner => "Det",
            PrimaryPos::PostPositive => "Postp",
            PrimaryPos::Question => "Ques",
            PrimaryPos::Duplicator => "Dup",
            PrimaryPos::Punctuation => "Punc",
            PrimaryPos::Unknown => "Unk",
        }
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized part-of-speech short form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPos(pub String);

impl fmt::Display for UnknownPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown part of speech `{}`", self.0)
    }
}

impl std::error::Error for UnknownPos {}

impl FromStr for PrimaryPos {
    type Err = UnknownPos;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimaryPos::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPos(s.to_string()))
    }
}

/// Secondary part-of-speech of a dictionary root. Most roots carry
/// [`SecondaryPos::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SecondaryPos {
    Unknown,
    DemonstrativePron,
    Time,
    QuantitivePron,
    QuestionPron,
    ProperNoun,
    PersonalPron,
    ReflexivePron,
    #[default]
    None,
    Ordinal,
    Cardinal,
    Percentage,
    Ratio,
    Range,
    Real,
    Distribution,
    Clock,
    Date,
    Email,
    Url,
    Mention,
    HashTag,
    Emoticon,
    RomanNumeral,
    RegularAbbreviation,
    Abbreviation,
    PCDat,
    PCAcc,
    PCIns,
    PCNom,
    PCGen,
    PCAbl,
}

impl SecondaryPos {
    const ALL: [SecondaryPos; 32] = [
        SecondaryPos::Unknown,
        SecondaryPos::DemonstrativePron,
        SecondaryPos::Time,
        SecondaryPos::QuantitivePron,
        SecondaryPos::QuestionPron,
        SecondaryPos::ProperNoun,
        SecondaryPos::PersonalPron,
        SecondaryPos::ReflexivePron,
        SecondaryPos::None,
        SecondaryPos::Ordinal,
        SecondaryPos::Cardinal,
        SecondaryPos::Percentage,
        SecondaryPos::Ratio,
        SecondaryPos::Range,
        SecondaryPos::Real,
        SecondaryPos::Distribution,
        SecondaryPos::Clock,
        SecondaryPos::Date,
        SecondaryPos::Email,
        SecondaryPos::Url,
        SecondaryPos::Mention,
        SecondaryPos::HashTag,
        SecondaryPos::Emoticon,
        SecondaryPos::RomanNumeral,
        SecondaryPos::RegularAbbreviation,
        SecondaryPos::Abbreviation,
        SecondaryPos::PCDat,
        SecondaryPos::PCAcc,
        SecondaryPos::PCIns,
        SecondaryPos::PCNom,
        SecondaryPos::PCGen,
        SecondaryPos::PCAbl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SecondaryPos::Unknown => "Unk",
            SecondaryPos::DemonstrativePron => "Demons",
            SecondaryPos::Time => "Time",
            SecondaryPos::QuantitivePron => "Quant",
            SecondaryPos::QuestionPron => "Ques",
            SecondaryPos::ProperNoun => "Prop",
            SecondaryPos::PersonalPron => "Pers",
            SecondaryPos::ReflexivePron => "Reflex",
            SecondaryPos::None => "None",
            SecondaryPos::Ordinal => "Ord",
            SecondaryPos::Cardinal => "Card",
            SecondaryPos::Percentage => "Percent",
            SecondaryPos::Ratio => "Ratio",
            SecondaryPos::Range => "Range",
            SecondaryPos::Real => "Real",
            SecondaryPos::Distribution => "Dist",
            SecondaryPos::Clock => "Clock",
            SecondaryPos::Date => "Date",
            SecondaryPos::Email => "Email",
            SecondaryPos::Url => "Url",
            SecondaryPos::Mention => "Mention",
            SecondaryPos::HashTag => "HashTag",
            SecondaryPos::Emoticon => "Emoticon",
            SecondaryPos::RomanNumeral => "RomanNumeral",
            SecondaryPos::RegularAbbreviation => "RegAbbrv",
            SecondaryPos::Abbreviation => "Abbrv",
            SecondaryPos::PCDat => "PCDat",
            SecondaryPos::PCAcc => "PCAcc",
            SecondaryPos::PCIns => "PCIns",
            SecondaryPos::PCNom => "PCNom",
            SecondaryPos::PCGen => "PCGen",
            SecondaryPos::PCAbl => "PCAbl",
        }
    }
}

impl fmt::Display for SecondaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecondaryPos {
    type Err = UnknownPos;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "Ques" and "Unk" collide with primary tags, so secondary parsing
        // only happens where the dictionary grammar expects a secondary tag.
        SecondaryPos::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPos(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_round_trip() {
        for pos in PrimaryPos::ALL {
            assert_eq!(pos.as_str().parse::<PrimaryPos>(), Ok(pos));
        }
        assert!("Verbish".parse::<PrimaryPos>().is_err());
    }

    #[test]
    fn secondary_round_trip() {
        assert_eq!(SecondaryPos::ALL.len(), 32);
        for pos in SecondaryPos::ALL {
            assert_eq!(pos.as_str().parse::<SecondaryPos>(), Ok(pos));
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(PrimaryPos::default(), PrimaryPos::Noun);
        assert_eq!(SecondaryPos::default(), SecondaryPos::None);
    }
}
