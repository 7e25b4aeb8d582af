// Suffix surface templates.
//
// A template is a compact rune notation for the shapes a suffix can take:
//
//   `lAr`    plain letters and an A-type vowel      -> lar / ler
//   `+yA`    optional buffer letter before a vowel  -> a / e / ya / ye
//   `>dAn`   first letter devoices after voiceless  -> dan / den / tan / ten
//   `>cI~k`  voiced-context variant marker          -> cık / ciğ pairs
//   `Iyor`   I-type vowel with fourfold harmony     -> ıyor / iyor / uyor / üyor

/// One token of a tokenized suffix template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixTemplateToken {
    /// A literal letter, emitted as is.
    Letter(char),
    /// `A`: low vowel selected by harmony (`a`/`e`). `+A` marks it optional.
    AVowel { optional: bool },
    /// `I`: high vowel selected by harmony (`ı`/`i`/`u`/`ü`). `+I` is optional.
    IVowel { optional: bool },
    /// `+x`: buffer letter emitted only after a vowel.
    Append(char),
    /// `>x`: letter devoiced when the predecessor ends voiceless.
    DevoiceFirst(char),
    /// `~x`: final letter of the variant used in voiced context.
    LastVoiced(char),
    /// `!x`: final letter of the variant that may not end a word.
    LastNotVoiced(char),
}

impl SuffixTemplateToken {
    /// The rune this token emits, if fixed.
    pub fn value(&self) -> Option<char> {
        match *self {
            SuffixTemplateToken::Letter(c)
            | SuffixTemplateToken::Append(c)
            | SuffixTemplateToken::DevoiceFirst(c)
            | SuffixTemplateToken::LastVoiced(c)
            | SuffixTemplateToken::LastNotVoiced(c) => Some(c),
            _ => None,
        }
    }
}

/// Tokenize a suffix template in a single left-to-right pass.
pub fn tokenize(template: &str) -> Vec<SuffixTemplateToken> {
    let runes: Vec<char> = template.chars().collect();
    let mut tokens = Vec::with_capacity(runes.len());
    let mut pos = 0;

    while pos < runes.len() {
        let ch = runes[pos];
        let next = runes.get(pos + 1).copied().unwrap_or('\0');
        match ch {
            '!' => {
                tokens.push(SuffixTemplateToken::LastNotVoiced(next));
                pos += 2;
            }
            '~' => {
                tokens.push(SuffixTemplateToken::LastVoiced(next));
                pos += 2;
            }
            '>' => {
                tokens.push(SuffixTemplateToken::DevoiceFirst(next));
                pos += 2;
            }
            '+' => {
                tokens.push(match next {
                    'I' => SuffixTemplateToken::IVowel { optional: true },
                    'A' => SuffixTemplateToken::AVowel { optional: true },
                    other => SuffixTemplateToken::Append(other),
                });
                pos += 2;
            }
            'A' => {
                tokens.push(SuffixTemplateToken::AVowel { optional: false });
                pos += 1;
            }
            'I' => {
                tokens.push(SuffixTemplateToken::IVowel { optional: false });
                pos += 1;
            }
            letter => {
                tokens.push(SuffixTemplateToken::Letter(letter));
                pos += 1;
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::SuffixTemplateToken as T;
    use super::*;

    #[test]
    fn plain_letters_and_vowels() {
        assert_eq!(
            tokenize("lAr"),
            vec![T::Letter('l'), T::AVowel { optional: false }, T::Letter('r')]
        );
        assert_eq!(
            tokenize("Iyor"),
            vec![
                T::IVowel { optional: false },
                T::Letter('y'),
                T::Letter('o'),
                T::Letter('r')
            ]
        );
    }

    #[test]
    fn optional_vowels_and_buffer_letters() {
        assert_eq!(tokenize("+yA"), vec![T::Append('y'), T::AVowel { optional: false }]);
        assert_eq!(
            tokenize("+nIn"),
            vec![T::Append('n'), T::IVowel { optional: false }, T::Letter('n')]
        );
        assert_eq!(tokenize("+Im"), vec![T::IVowel { optional: true }, T::Letter('m')]);
        assert_eq!(tokenize("+A"), vec![T::AVowel { optional: true }]);
    }

    #[test]
    fn devoice_and_variant_markers() {
        assert_eq!(
            tokenize(">dAn"),
            vec![T::DevoiceFirst('d'), T::AVowel { optional: false }, T::Letter('n')]
        );
        assert_eq!(
            tokenize(">cI~k"),
            vec![
                T::DevoiceFirst('c'),
                T::IVowel { optional: false },
                T::LastVoiced('k')
            ]
        );
        assert_eq!(
            tokenize(">cI!ğ"),
            vec![
                T::DevoiceFirst('c'),
                T::IVowel { optional: false },
                T::LastNotVoiced('ğ')
            ]
        );
    }

    #[test]
    fn empty_template_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }
}
