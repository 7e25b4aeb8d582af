// One complete analysis of a word: the dictionary item plus the chain
// of realized morphemes, partitioned into inflection groups at
// derivation boundaries.

use std::fmt;
use std::sync::Arc;

use sarmal_core::{RootAttribute, SecondaryPos};

use crate::lexicon::DictionaryItem;
use crate::morphotactics::Morpheme;

use super::search_path::SearchPath;

/// A morpheme together with the surface it produced. Empty surface means
/// the morpheme was realized by an epsilon transition.
#[derive(Debug, Clone)]
pub struct MorphemeData {
    pub morpheme: Arc<Morpheme>,
    pub surface: String,
}

impl fmt::Display for MorphemeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.surface.is_empty() {
            write!(f, "{}", self.morpheme.id)
        } else {
            write!(f, "{}:{}", self.surface, self.morpheme.id)
        }
    }
}

#[derive(Debug, Clone)]
pub struct SingleAnalysis {
    item: Arc<DictionaryItem>,
    morphemes: Vec<MorphemeData>,
    group_boundaries: Vec<usize>,
}

impl SingleAnalysis {
    /// Collapses a finished search path into an analysis. `Pnon` and
    /// `Nom` nodes are dropped as visual noise, matching zemberek output.
    pub fn from_search_path(path: &SearchPath) -> SingleAnalysis {
        let mut morphemes = Vec::with_capacity(path.nodes().len());
        let mut derivation_count = 0;

        for node in path.nodes() {
            if node.morpheme.id == "Pnon" || node.morpheme.id == "Nom" {
                continue;
            }
            if node.derivative {
                derivation_count += 1;
            }
            morphemes.push(MorphemeData {
                morpheme: node.morpheme.clone(),
                surface: node.surface.clone(),
            });
        }

        let mut group_boundaries = vec![0; derivation_count + 1];
        let mut boundary = 1;
        for (i, data) in morphemes.iter().enumerate() {
            if data.morpheme.derivational {
                group_boundaries[boundary] = i;
                boundary += 1;
            }
        }

        let mut item = path.item().clone();
        if item.has_attribute(RootAttribute::Dummy) {
            if let Some(reference) = &item.reference_item {
                item = reference.clone();
            }
        }

        SingleAnalysis {
            item,
            morphemes,
            group_boundaries,
        }
    }

    /// Placeholder analysis for input no dictionary stem covers.
    pub fn unknown(input: &str) -> SingleAnalysis {
        SingleAnalysis {
            item: DictionaryItem::unknown(),
            morphemes: vec![MorphemeData {
                morpheme: Morpheme::unknown(),
                surface: input.to_string(),
            }],
            group_boundaries: vec![0],
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.item.is_unknown()
    }

    pub fn item(&self) -> &Arc<DictionaryItem> {
        &self.item
    }

    pub fn morphemes(&self) -> &[MorphemeData] {
        &self.morphemes
    }

    pub fn group_count(&self) -> usize {
        self.group_boundaries.len()
    }

    /// Surface of the root node.
    pub fn stem(&self) -> &str {
        self.morphemes.first().map(|m| m.surface.as_str()).unwrap_or("")
    }

    /// Concatenated suffix surfaces after the stem.
    pub fn ending(&self) -> String {
        self.morphemes
            .iter()
            .skip(1)
            .map(|m| m.surface.as_str())
            .collect()
    }

    pub fn surface_form(&self) -> String {
        format!("{}{}", self.stem(), self.ending())
    }

    pub fn contains_morpheme(&self, morpheme_id: &str) -> bool {
        self.morphemes.iter().any(|m| m.morpheme.id == morpheme_id)
    }

    pub fn contains_informal_morpheme(&self) -> bool {
        self.morphemes.iter().any(|m| m.morpheme.informal)
    }

    /// Zemberek style format: `[lemma:Pos] stem:Morpheme+...|derived:Morpheme→...`
    pub fn format(&self) -> String {
        let mut out = String::new();
        out.push('[');
        out.push_str(&self.item.lemma);
        out.push(':');
        out.push_str(self.item.primary_pos.as_str());
        if self.item.secondary_pos != SecondaryPos::None {
            out.push_str(", ");
            out.push_str(self.item.secondary_pos.as_str());
        }
        out.push_str("] ");

        out.push_str(self.stem());
        out.push(':');
        out.push_str(self.morphemes[0].morpheme.id);

        if self.morphemes.len() > 1 && !self.morphemes[1].morpheme.derivational {
            out.push('+');
        }
        for i in 1..self.morphemes.len() {
            let data = &self.morphemes[i];
            if data.morpheme.derivational {
                out.push('|');
            }
            if !data.surface.is_empty() {
                out.push_str(&data.surface);
                out.push(':');
            }
            out.push_str(data.morpheme.id);
            if data.morpheme.derivational {
                out.push('→');
            } else if i < self.morphemes.len() - 1 && !self.morphemes[i + 1].morpheme.derivational {
                out.push('+');
            }
        }
        out
    }
}

impl fmt::Display for SingleAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::RuleBasedAnalyzer;
    use crate::lexicon::RootLexicon;
    use crate::morphotactics::TurkishMorphotactics;

    fn analyze(lines: &[&str], input: &str) -> Vec<SingleAnalysis> {
        let lexicon = RootLexicon::from_lines(lines.iter().copied());
        RuleBasedAnalyzer::new(std::sync::Arc::new(TurkishMorphotactics::new(lexicon)))
            .analyze(input)
    }

    #[test]
    fn pnon_and_nom_are_elided() {
        let results = analyze(&["kitap"], "kitap");
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert!(!r.contains_morpheme("Pnon"));
        assert!(!r.contains_morpheme("Nom"));
        assert_eq!(r.format(), "[kitap:Noun] kitap:Noun+A3sg");
    }

    #[test]
    fn stem_and_ending_split() {
        let results = analyze(&["ev"], "evlerden");
        let r = &results[0];
        assert_eq!(r.stem(), "ev");
        assert_eq!(r.ending(), "lerden");
        assert_eq!(r.surface_form(), "evlerden");
    }

    #[test]
    fn derivation_starts_a_new_group() {
        let results = analyze(&["göz"], "gözlük");
        assert!(!results.is_empty());
        let r = results
            .iter()
            .find(|r| r.contains_morpheme("Ness"))
            .unwrap();
        assert_eq!(r.group_count(), 2);
        assert!(r.format().contains("|lük:Ness→"));
    }

    #[test]
    fn unknown_analysis_is_flagged() {
        let unknown = SingleAnalysis::unknown("qwe");
        assert!(unknown.is_unknown());
        assert_eq!(unknown.surface_form(), "qwe");
    }
}
