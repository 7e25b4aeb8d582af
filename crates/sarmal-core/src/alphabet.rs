// Turkish alphabet: letter classification, case rules, voicing maps,
// diacritic folding.

use std::sync::OnceLock;

use hashbrown::{HashMap, HashSet};

use crate::letter::{TurkicLetter, UNDEFINED};

// ---------------------------------------------------------------------------
// Letter inventory
// ---------------------------------------------------------------------------

const VOICING_IN: &str = "çgkpt";
const VOICING_OUT: &str = "cğğbd";
const DEVOICING_IN: &str = "bcdgğ";
const DEVOICING_OUT: &str = "pçtkk";

const CIRCUMFLEX: &str = "âîû";
const CIRCUMFLEX_NORMALIZED: &str = "aiu";

/// Turkish-specific letters and their ASCII projections, used both for
/// `to_ascii` and for building diacritics-folded lookup keys.
const TURKISH_SPECIFIC: &str = "çÇğĞıİöÖşŞüÜâîûÂÎÛ";
const TURKISH_ASCII: &str = "cCgGiIoOsSuUaiuAIU";

/// Pairs considered equal under diacritic-insensitive comparison.
/// Each rune maps to its single counterpart on the other side.
const ASCII_EQ_IN: &str = "cCgGiIoOsSuUçÇğĞıİöÖşŞüÜ";
const ASCII_EQ_OUT: &str = "çÇğĞıİöÖşŞüÜcCgGiIoOsSuU";

const FOREIGN_DIACRITICS: &str = "ÀÁÂÃÄÅÈÉÊËÌÍÎÏÑÒÓÔÕÙÚÛàáâãäåèéêëìíîïñòóôõùúû";
const DIACRITICS_TO_TURKISH: &str = "AAAAAAEEEEIIIINOOOOUUUaaaaaaeeeeiiiinoooouuu";

const APOSTROPHES: &[char] = &['\'', '\u{2019}', '\u{2018}', '\u{2032}', '\u{00B4}', '`'];

fn base_letters() -> Vec<TurkicLetter> {
    // (rune, vowel, frontal, rounded, voiceless, continuant)
    vec![
        TurkicLetter::new('a', true, false, false, false, false),
        TurkicLetter::new('e', true, true, false, false, false),
        TurkicLetter::new('ı', true, false, false, false, false),
        TurkicLetter::new('i', true, true, false, false, false),
        TurkicLetter::new('o', true, false, true, false, false),
        TurkicLetter::new('ö', true, true, true, false, false),
        TurkicLetter::new('u', true, false, true, false, false),
        TurkicLetter::new('ü', true, true, true, false, false),
        TurkicLetter::new('â', true, false, false, false, false),
        TurkicLetter::new('î', true, true, false, false, false),
        TurkicLetter::new('û', true, true, true, false, false),
        TurkicLetter::new('b', false, false, false, false, false),
        TurkicLetter::new('c', false, false, false, false, false),
        TurkicLetter::new('ç', false, false, false, true, false),
        TurkicLetter::new('d', false, false, false, false, false),
        TurkicLetter::new('f', false, false, false, true, true),
        TurkicLetter::new('g', false, false, false, false, false),
        TurkicLetter::new('ğ', false, false, false, false, true),
        TurkicLetter::new('h', false, false, false, true, true),
        TurkicLetter::new('j', false, false, false, false, true),
        TurkicLetter::new('k', false, false, false, true, false),
        TurkicLetter::new('l', false, false, false, false, true),
        TurkicLetter::new('m', false, false, false, false, true),
        TurkicLetter::new('n', false, false, false, false, true),
        TurkicLetter::new('p', false, false, false, true, false),
        TurkicLetter::new('r', false, false, false, false, true),
        TurkicLetter::new('s', false, false, false, true, true),
        TurkicLetter::new('ş', false, false, false, true, true),
        TurkicLetter::new('t', false, false, false, true, false),
        TurkicLetter::new('v', false, false, false, false, true),
        TurkicLetter::new('y', false, false, false, false, true),
        TurkicLetter::new('z', false, false, false, false, true),
        TurkicLetter::new('q', false, false, false, false, false),
        TurkicLetter::new('w', false, false, false, false, false),
        TurkicLetter::new('x', false, false, false, false, false),
    ]
}

// ---------------------------------------------------------------------------
// Turkish case conversion
// ---------------------------------------------------------------------------

/// Turkish-aware lowercase for a single rune: `I -> ı`, `İ -> i`, others
/// follow Unicode.
pub fn lower_char(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Turkish-aware uppercase for a single rune: `i -> İ`, others follow
/// Unicode (`ı -> I` is already the Unicode mapping).
pub fn upper_char(c: char) -> char {
    match c {
        'i' => 'İ',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Turkish-aware lowercasing of a whole string.
pub fn to_lower(s: &str) -> String {
    s.chars().map(lower_char).collect()
}

/// Turkish-aware uppercasing of a whole string.
pub fn to_upper(s: &str) -> String {
    s.chars().map(upper_char).collect()
}

// ---------------------------------------------------------------------------
// The alphabet singleton
// ---------------------------------------------------------------------------

/// The Turkish alphabet: rune classification, voicing and devoicing maps,
/// and diacritic folding.
///
/// A process-wide singleton obtained through [`TurkishAlphabet::instance`].
/// Construction fills every lookup table once; afterwards the alphabet is
/// read-only and safe to share across threads.
pub struct TurkishAlphabet {
    letters: HashMap<char, TurkicLetter>,
    voicing: HashMap<char, char>,
    devoicing: HashMap<char, char>,
    circumflex: HashMap<char, char>,
    turkish_to_ascii: HashMap<char, char>,
    ascii_equal: HashMap<char, char>,
    foreign_diacritics: HashMap<char, char>,
    apostrophes: HashSet<char>,
}

static INSTANCE: OnceLock<TurkishAlphabet> = OnceLock::new();

impl TurkishAlphabet {
    /// The process-wide alphabet instance.
    pub fn instance() -> &'static TurkishAlphabet {
        INSTANCE.get_or_init(TurkishAlphabet::build)
    }

    fn build() -> Self {
        let mut letters = HashMap::new();
        for letter in base_letters() {
            let cap = letter.copy_for(upper_char(letter.ch));
            letters.insert(letter.ch, letter);
            letters.insert(cap.ch, cap);
        }

        let mut voicing = HashMap::new();
        populate(&mut voicing, VOICING_IN, VOICING_OUT);
        populate(&mut voicing, &to_upper(VOICING_IN), &to_upper(VOICING_OUT));

        let mut devoicing = HashMap::new();
        populate(&mut devoicing, DEVOICING_IN, DEVOICING_OUT);
        populate(&mut devoicing, &to_upper(DEVOICING_IN), &to_upper(DEVOICING_OUT));

        let mut circumflex = HashMap::new();
        populate(&mut circumflex, CIRCUMFLEX, CIRCUMFLEX_NORMALIZED);
        populate(&mut circumflex, &to_upper(CIRCUMFLEX), &to_upper(CIRCUMFLEX_NORMALIZED));

        let mut turkish_to_ascii = HashMap::new();
        populate(&mut turkish_to_ascii, TURKISH_SPECIFIC, TURKISH_ASCII);

        let mut ascii_equal = HashMap::new();
        populate(&mut ascii_equal, ASCII_EQ_IN, ASCII_EQ_OUT);

        let mut foreign_diacritics = HashMap::new();
        populate(&mut foreign_diacritics, FOREIGN_DIACRITICS, DIACRITICS_TO_TURKISH);

        let apostrophes = APOSTROPHES.iter().copied().collect();

        Self {
            letters,
            voicing,
            devoicing,
            circumflex,
            turkish_to_ascii,
            ascii_equal,
            foreign_diacritics,
            apostrophes,
        }
    }

    // -- Letter lookups -----------------------------------------------------

    /// Look up the letter table entry for a rune. Unrecognized runes yield
    /// the [`UNDEFINED`] sentinel; this never fails.
    pub fn get_letter(&self, c: char) -> TurkicLetter {
        self.letters.get(&c).copied().unwrap_or(UNDEFINED)
    }

    pub fn get_first_letter(&self, s: &str) -> TurkicLetter {
        s.chars().next().map_or(UNDEFINED, |c| self.get_letter(c))
    }

    pub fn get_last_letter(&self, s: &str) -> TurkicLetter {
        s.chars().next_back().map_or(UNDEFINED, |c| self.get_letter(c))
    }

    /// The last vowel of the sequence, scanning from the end.
    pub fn get_last_vowel(&self, s: &str) -> TurkicLetter {
        s.chars()
            .rev()
            .find(|&c| self.is_vowel(c))
            .map_or(UNDEFINED, |c| self.get_letter(c))
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.get_letter(c).is_vowel() && !self.get_letter(c).is_undefined()
    }

    pub fn contains_vowel(&self, s: &str) -> bool {
        s.chars().any(|c| self.is_vowel(c))
    }

    // -- Voicing / devoicing ------------------------------------------------

    /// Voiced counterpart of a rune (`ç→c g→ğ k→ğ p→b t→d`), or the rune
    /// itself when no alternation applies.
    pub fn voice(&self, c: char) -> char {
        self.voicing.get(&c).copied().unwrap_or(c)
    }

    /// Devoiced counterpart of a rune (`b→p c→ç d→t g→k ğ→k`), or the rune
    /// itself when no alternation applies.
    pub fn devoice(&self, c: char) -> char {
        self.devoicing.get(&c).copied().unwrap_or(c)
    }

    // -- Diacritic folding --------------------------------------------------

    /// True when the two runes are equal under the diacritic fold, i.e.
    /// identical or an `ı/i`-style pair.
    pub fn is_ascii_equal(&self, c1: char, c2: char) -> bool {
        c1 == c2 || self.ascii_equal.get(&c1).copied() == Some(c2)
    }

    /// Rune-wise equality ignoring Turkish diacritics.
    pub fn equals_ignore_diacritics(&self, s1: &str, s2: &str) -> bool {
        if s1.chars().count() != s2.chars().count() {
            return false;
        }
        s1.chars().zip(s2.chars()).all(|(a, b)| self.is_ascii_equal(a, b))
    }

    /// True when `s1` starts with `s2` under the diacritic fold.
    pub fn starts_with_ignore_diacritics(&self, s1: &str, s2: &str) -> bool {
        if s1.chars().count() < s2.chars().count() {
            return false;
        }
        s2.chars().zip(s1.chars()).all(|(b, a)| self.is_ascii_equal(a, b))
    }

    /// Project Turkish-specific letters to their ASCII counterparts
    /// (`ç→c`, `ğ→g`, `ı→i`, ...). Other runes pass through.
    pub fn to_ascii(&self, s: &str) -> String {
        s.chars().map(|c| self.turkish_to_ascii.get(&c).copied().unwrap_or(c)).collect()
    }

    pub fn contains_ascii_related(&self, s: &str) -> bool {
        s.chars().any(|c| self.ascii_equal.contains_key(&c))
    }

    // -- Circumflex ---------------------------------------------------------

    pub fn contains_circumflex(&self, s: &str) -> bool {
        s.chars().any(|c| self.circumflex.contains_key(&c))
    }

    /// Fold circumflexed vowels to their plain forms (`â→a î→i û→u`).
    pub fn normalize_circumflex(&self, s: &str) -> String {
        if !self.contains_circumflex(s) {
            return s.to_string();
        }
        s.chars().map(|c| self.circumflex.get(&c).copied().unwrap_or(c)).collect()
    }

    // -- Foreign diacritics -------------------------------------------------

    pub fn contains_foreign_diacritics(&self, s: &str) -> bool {
        s.chars().any(|c| self.foreign_diacritics.contains_key(&c))
    }

    /// Replace foreign accented Latin letters with their closest Turkish
    /// base letters (`é→e`, `à→a`, ...).
    pub fn foreign_diacritics_to_turkish(&self, s: &str) -> String {
        s.chars().map(|c| self.foreign_diacritics.get(&c).copied().unwrap_or(c)).collect()
    }

    // -- Apostrophes --------------------------------------------------------

    pub fn contains_apostrophe(&self, s: &str) -> bool {
        s.chars().any(|c| self.apostrophes.contains(&c))
    }

    /// Map every apostrophe variant (typographic quotes, primes, accents)
    /// to the plain `'`.
    pub fn normalize_apostrophes(&self, s: &str) -> String {
        if !self.contains_apostrophe(s) {
            return s.to_string();
        }
        s.chars().map(|c| if self.apostrophes.contains(&c) { '\'' } else { c }).collect()
    }
}

fn populate(map: &mut HashMap<char, char>, input: &str, output: &str) {
    for (i, o) in input.chars().zip(output.chars()) {
        map.insert(i, o);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> &'static TurkishAlphabet {
        TurkishAlphabet::instance()
    }

    #[test]
    fn letter_table_covers_the_alphabet() {
        // Lowercase inventory: 29 Turkish letters, the foreign q, w, x
        // and the circumflexed vowels.
        let a = alphabet();
        for c in "abcçdefgğhıijklmnoöprsştuüvyzxwqâîû".chars() {
            assert_ne!(a.get_letter(c), UNDEFINED, "no table entry for {c:?}");
        }
        assert_eq!(a.get_letter('0'), UNDEFINED);
    }

    #[test]
    fn turkish_case_rules() {
        assert_eq!(to_lower("IĞDIR"), "ığdır");
        assert_eq!(to_lower("İstanbul"), "istanbul");
        assert_eq!(to_upper("izmir"), "İZMİR");
        assert_eq!(to_upper("ığdır"), "IĞDIR");
    }

    #[test]
    fn letter_classification() {
        let a = alphabet();
        assert!(a.get_letter('a').is_vowel());
        assert!(!a.get_letter('a').is_frontal());
        assert!(a.get_letter('ü').is_vowel());
        assert!(a.get_letter('ü').is_frontal());
        assert!(a.get_letter('ü').is_rounded());
        assert!(a.get_letter('k').is_stop_consonant());
        assert!(a.get_letter('ş').is_voiceless());
        assert!(!a.get_letter('ş').is_stop_consonant());
    }

    #[test]
    fn capitals_share_attributes() {
        let a = alphabet();
        assert!(a.get_letter('Ü').is_vowel());
        assert!(a.get_letter('Ü').is_rounded());
        assert!(a.get_letter('K').is_stop_consonant());
        assert!(a.get_letter('İ').is_frontal());
    }

    #[test]
    fn unknown_rune_is_undefined() {
        let a = alphabet();
        assert!(a.get_letter('5').is_undefined());
        assert!(a.get_letter('#').is_undefined());
        assert!(!a.is_vowel('5'));
    }

    #[test]
    fn voicing_and_devoicing() {
        let a = alphabet();
        assert_eq!(a.voice('t'), 'd');
        assert_eq!(a.voice('k'), 'ğ');
        assert_eq!(a.voice('p'), 'b');
        assert_eq!(a.voice('ç'), 'c');
        assert_eq!(a.voice('m'), 'm');
        assert_eq!(a.devoice('b'), 'p');
        assert_eq!(a.devoice('d'), 't');
        assert_eq!(a.devoice('ğ'), 'k');
        assert_eq!(a.devoice('g'), 'k');
        assert_eq!(a.devoice('c'), 'ç');
    }

    #[test]
    fn last_vowel_and_contains_vowel() {
        let a = alphabet();
        assert_eq!(a.get_last_vowel("kitap").ch, 'a');
        assert_eq!(a.get_last_vowel("gözlük").ch, 'ü');
        assert!(a.get_last_vowel("krk").is_undefined());
        assert!(a.contains_vowel("ev"));
        assert!(!a.contains_vowel("krk"));
        assert!(!a.contains_vowel(""));
    }

    #[test]
    fn diacritics_fold() {
        let a = alphabet();
        assert!(a.is_ascii_equal('c', 'ç'));
        assert!(a.is_ascii_equal('ç', 'c'));
        assert!(a.is_ascii_equal('a', 'a'));
        assert!(!a.is_ascii_equal('a', 'e'));
        assert!(a.equals_ignore_diacritics("kisi", "kişi"));
        assert!(a.starts_with_ignore_diacritics("kişiler", "kisi"));
        assert!(!a.starts_with_ignore_diacritics("ev", "evler"));
        assert_eq!(a.to_ascii("çığ öüş"), "cig ous");
    }

    #[test]
    fn circumflex_normalization() {
        let a = alphabet();
        assert!(a.contains_circumflex("kâr"));
        assert_eq!(a.normalize_circumflex("kâr"), "kar");
        assert_eq!(a.normalize_circumflex("kitap"), "kitap");
    }

    #[test]
    fn apostrophe_normalization() {
        let a = alphabet();
        assert!(a.contains_apostrophe("Ankara\u{2019}da"));
        assert_eq!(a.normalize_apostrophes("Ankara\u{2019}da"), "Ankara'da");
        assert!(!a.contains_apostrophe("Ankara"));
    }

    #[test]
    fn foreign_diacritics() {
        let a = alphabet();
        assert!(a.contains_foreign_diacritics("café"));
        assert_eq!(a.foreign_diacritics_to_turkish("café"), "cafe");
    }
}
