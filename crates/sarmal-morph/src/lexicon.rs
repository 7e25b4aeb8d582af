// Dictionary items and the root lexicon.
//
// The text format follows the zemberek dictionary convention:
//
//   kitap
//   gitmek [P:Verb]
//   armut [A:Voicing]
//   su [P:Noun; A:Voicing]

use std::fmt;
use std::sync::{Arc, OnceLock};

use hashbrown::HashMap;
use log::warn;
use thiserror::Error;

use sarmal_core::{PrimaryPos, RootAttribute, RootAttributeSet, SecondaryPos};

/// Errors produced while parsing a dictionary line.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("empty dictionary line")]
    EmptyLine,
    #[error("unterminated metadata section in `{0}`")]
    UnterminatedMetadata(String),
    #[error("missing lemma in `{0}`")]
    MissingLemma(String),
    #[error("unknown part of speech `{pos}` in `{line}`")]
    UnknownPos { pos: String, line: String },
}

// ---------------------------------------------------------------------------
// DictionaryItem
// ---------------------------------------------------------------------------

/// A single root entry of the lexicon.
///
/// Identity is the `id` string, generated as `lemma_Pos[_SPos][_index]`.
/// For verbs the `root` is the lemma without its `-mek`/`-mak` infinitive
/// suffix (`gitmek` -> `git`).
#[derive(Debug)]
pub struct DictionaryItem {
    pub lemma: String,
    pub root: String,
    pub primary_pos: PrimaryPos,
    pub secondary_pos: SecondaryPos,
    pub attributes: RootAttributeSet,
    pub pronunciation: String,
    pub index: u32,
    pub id: String,
    /// For synthetic (`Dummy`) items, the real root this item stands for.
    pub reference_item: Option<Arc<DictionaryItem>>,
}

impl DictionaryItem {
    pub fn new(
        lemma: impl Into<String>,
        root: impl Into<String>,
        primary_pos: PrimaryPos,
        secondary_pos: SecondaryPos,
        attributes: RootAttributeSet,
        pronunciation: Option<String>,
        index: u32,
    ) -> Self {
        let lemma = lemma.into();
        let root = root.into();
        let pronunciation = pronunciation.unwrap_or_else(|| root.clone());
        let id = generate_item_id(&lemma, primary_pos, secondary_pos, index);
        Self {
            lemma,
            root,
            primary_pos,
            secondary_pos,
            attributes,
            pronunciation,
            index,
            id,
            reference_item: None,
        }
    }

    /// The sentinel returned for words no dictionary root accounts for.
    pub fn unknown() -> Arc<DictionaryItem> {
        static UNKNOWN: OnceLock<Arc<DictionaryItem>> = OnceLock::new();
        UNKNOWN
            .get_or_init(|| {
                // Built with the plain id `UNK_Unk`; the secondary pos is
                // set afterwards so it does not leak into the id.
                let mut item = DictionaryItem::new(
                    "UNK",
                    "UNK",
                    PrimaryPos::Unknown,
                    SecondaryPos::None,
                    RootAttributeSet::new(),
                    None,
                    0,
                );
                item.secondary_pos = SecondaryPos::Unknown;
                Arc::new(item)
            })
            .clone()
    }

    pub fn is_unknown(&self) -> bool {
        self.id == "UNK_Unk"
    }

    pub fn has_attribute(&self, attribute: RootAttribute) -> bool {
        self.attributes.contains(attribute)
    }

    /// Parse a single dictionary line. The item index disambiguates
    /// homonym lemmas sharing a part of speech.
    pub fn parse(line: &str, index: u32) -> Result<Self, LexiconError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(LexiconError::EmptyLine);
        }

        let (lemma_part, meta_part) = match line.find('[') {
            Some(open) => {
                let rest = &line[open + 1..];
                let close = rest
                    .find(']')
                    .ok_or_else(|| LexiconError::UnterminatedMetadata(line.to_string()))?;
                (line[..open].trim(), Some(rest[..close].trim()))
            }
            None => (line, None),
        };

        if lemma_part.is_empty() {
            return Err(LexiconError::MissingLemma(line.to_string()));
        }
        let lemma = lemma_part.to_string();

        let mut primary_pos = None;
        let mut secondary_pos = SecondaryPos::None;
        let mut attributes = RootAttributeSet::new();
        let mut pronunciation = None;

        if let Some(meta) = meta_part {
            for section in meta.split(';') {
                let section = section.trim();
                if let Some(pos_part) = section.strip_prefix("P:") {
                    let mut parts = pos_part.split(',').map(str::trim);
                    if let Some(first) = parts.next() {
                        primary_pos = Some(first.parse::<PrimaryPos>().map_err(|_| {
                            LexiconError::UnknownPos {
                                pos: first.to_string(),
                                line: line.to_string(),
                            }
                        })?);
                    }
                    if let Some(second) = parts.next() {
                        match second.parse::<SecondaryPos>() {
                            Ok(spos) => secondary_pos = spos,
                            Err(_) => {
                                warn!("skipping unknown secondary pos `{second}` in `{line}`");
                            }
                        }
                    }
                } else if let Some(attr_part) = section.strip_prefix("A:") {
                    for name in attr_part.split(',').map(str::trim) {
                        match name.parse::<RootAttribute>() {
                            Ok(attr) => attributes.add(attr),
                            Err(_) => warn!("skipping unknown attribute `{name}` in `{line}`"),
                        }
                    }
                } else if let Some(pron) = section.strip_prefix("Pr:") {
                    pronunciation = Some(pron.trim().to_string());
                }
            }
        }

        // Bare `-mek`/`-mak` lemmas are verbs even without a P: section.
        let primary_pos = primary_pos.unwrap_or_else(|| {
            if lemma.ends_with("mek") || lemma.ends_with("mak") {
                PrimaryPos::Verb
            } else {
                PrimaryPos::Noun
            }
        });

        let root = if primary_pos == PrimaryPos::Verb
            && (lemma.ends_with("mek") || lemma.ends_with("mak"))
        {
            lemma[..lemma.len() - 3].to_string()
        } else {
            lemma.clone()
        };

        Ok(DictionaryItem::new(
            lemma,
            root,
            primary_pos,
            secondary_pos,
            attributes,
            pronunciation,
            index,
        ))
    }
}

impl fmt::Display for DictionaryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [P:{}", self.lemma, self.primary_pos)?;
        if self.secondary_pos != SecondaryPos::None {
            write!(f, ", {}", self.secondary_pos)?;
        }
        if !self.attributes.is_empty() {
            f.write_str("; A:")?;
            for (i, attr) in self.attributes.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(attr.as_str())?;
            }
        }
        f.write_str("]")
    }
}

fn generate_item_id(lemma: &str, pos: PrimaryPos, spos: SecondaryPos, index: u32) -> String {
    let mut id = format!("{lemma}_{pos}");
    if spos != SecondaryPos::None {
        id.push('_');
        id.push_str(spos.as_str());
    }
    if index > 0 {
        id.push('_');
        id.push_str(&index.to_string());
    }
    id
}

// ---------------------------------------------------------------------------
// RootLexicon
// ---------------------------------------------------------------------------

/// The set of dictionary roots, indexed by id and by lemma.
/// Insertion order is preserved; it decides tie-breaks in stem lookup.
#[derive(Default)]
pub struct RootLexicon {
    items: Vec<Arc<DictionaryItem>>,
    id_map: HashMap<String, Arc<DictionaryItem>>,
    lemma_map: HashMap<String, Vec<Arc<DictionaryItem>>>,
}

impl RootLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from dictionary-format lines. Malformed lines are
    /// logged and skipped; data errors never abort the load. Homonyms
    /// (same lemma and part of speech) get increasing indices, so only
    /// repeated entries carry an `_N` id suffix.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        let mut homonym_counts: HashMap<String, u32> = HashMap::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match DictionaryItem::parse(line, 0) {
                Ok(mut item) => {
                    let index = homonym_counts.entry(item.id.clone()).or_insert(0);
                    if *index > 0 {
                        item.index = *index;
                        item.id = generate_item_id(
                            &item.lemma,
                            item.primary_pos,
                            item.secondary_pos,
                            *index,
                        );
                    }
                    *index += 1;
                    lexicon.add(Arc::new(item));
                }
                Err(err) => warn!("skipping dictionary line `{line}`: {err}"),
            }
        }
        lexicon
    }

    /// Add an item. Duplicate ids are logged and dropped.
    pub fn add(&mut self, item: Arc<DictionaryItem>) {
        if self.id_map.contains_key(&item.id) {
            warn!("duplicate dictionary item id `{}`", item.id);
            return;
        }
        self.id_map.insert(item.id.clone(), item.clone());
        self.lemma_map
            .entry(item.lemma.clone())
            .or_default()
            .push(item.clone());
        self.items.push(item);
    }

    pub fn item_by_id(&self, id: &str) -> Option<&Arc<DictionaryItem>> {
        self.id_map.get(id)
    }

    pub fn items(&self, lemma: &str) -> &[Arc<DictionaryItem>] {
        self.lemma_map.get(lemma).map_or(&[], Vec::as_slice)
    }

    /// All items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DictionaryItem>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_noun() {
        let item = DictionaryItem::parse("kitap", 0).unwrap();
        assert_eq!(item.lemma, "kitap");
        assert_eq!(item.root, "kitap");
        assert_eq!(item.primary_pos, PrimaryPos::Noun);
        assert_eq!(item.id, "kitap_Noun");
    }

    #[test]
    fn parse_verb_strips_infinitive() {
        let item = DictionaryItem::parse("gitmek [P:Verb]", 0).unwrap();
        assert_eq!(item.lemma, "gitmek");
        assert_eq!(item.root, "git");
        assert_eq!(item.primary_pos, PrimaryPos::Verb);
        assert_eq!(item.id, "gitmek_Verb");
    }

    #[test]
    fn bare_infinitive_is_inferred_as_verb() {
        let item = DictionaryItem::parse("yapmak", 0).unwrap();
        assert_eq!(item.primary_pos, PrimaryPos::Verb);
        assert_eq!(item.root, "yap");
    }

    #[test]
    fn parse_attributes_and_secondary_pos() {
        let item = DictionaryItem::parse("Ankara [P:Noun, Prop; A:Voicing, NoSuffix]", 0).unwrap();
        assert_eq!(item.secondary_pos, SecondaryPos::ProperNoun);
        assert!(item.has_attribute(RootAttribute::Voicing));
        assert!(item.has_attribute(RootAttribute::NoSuffix));
        assert_eq!(item.id, "Ankara_Noun_Prop");
    }

    #[test]
    fn index_disambiguates_homonyms() {
        let first = DictionaryItem::parse("yüz", 0).unwrap();
        let second = DictionaryItem::parse("yüz", 1).unwrap();
        assert_eq!(first.id, "yüz_Noun");
        assert_eq!(second.id, "yüz_Noun_1");
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(DictionaryItem::parse("", 0).is_err());
        assert!(DictionaryItem::parse("kitap [P:Noun", 0).is_err());
        assert!(DictionaryItem::parse("[P:Noun]", 0).is_err());
        assert!(DictionaryItem::parse("kelime [P:Bogus]", 0).is_err());
    }

    #[test]
    fn lexicon_indexes_by_lemma_and_id() {
        let lexicon = RootLexicon::from_lines([
            "kitap",
            "# a comment",
            "",
            "gitmek [P:Verb]",
            "kitap [P:Noun",
        ]);
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.items("kitap").len(), 1);
        assert!(lexicon.item_by_id("gitmek_Verb").is_some());
        assert!(lexicon.item_by_id("nope_Noun").is_none());
    }

    #[test]
    fn homonym_indices_do_not_depend_on_file_position() {
        let lexicon = RootLexicon::from_lines(["kitap", "gitmek [P:Verb]", "yüz", "yüz"]);
        // Preceding lines must not push an item past index 0.
        assert!(lexicon.item_by_id("gitmek_Verb").is_some());
        assert!(lexicon.item_by_id("gitmek_Verb_1").is_none());
        // Only true homonyms are disambiguated.
        let homonyms = lexicon.items("yüz");
        assert_eq!(homonyms.len(), 2);
        assert_eq!(homonyms[0].id, "yüz_Noun");
        assert_eq!(homonyms[1].id, "yüz_Noun_1");
        assert_eq!(homonyms[1].index, 1);
    }

    #[test]
    fn unknown_sentinel() {
        let unknown = DictionaryItem::unknown();
        assert!(unknown.is_unknown());
        assert_eq!(unknown.id, "UNK_Unk");
        assert!(!DictionaryItem::parse("kitap", 0).unwrap().is_unknown());
    }
}
