//! Top level analysis API tying the lexicon, the morphotactic graph and
//! the rule based analyzer together.

use std::sync::Arc;

use sarmal_core::{alphabet, TurkishAlphabet};

use crate::analysis::{RuleBasedAnalyzer, SingleAnalysis, WordAnalysis};
use crate::lexicon::RootLexicon;
use crate::morphotactics::TurkishMorphotactics;

pub struct TurkishMorphology {
    graph: Arc<TurkishMorphotactics>,
    analyzer: RuleBasedAnalyzer,
}

pub struct TurkishMorphologyBuilder {
    lexicon: RootLexicon,
    ignore_diacritics: bool,
}

impl TurkishMorphologyBuilder {
    pub fn new(lexicon: RootLexicon) -> Self {
        Self {
            lexicon,
            ignore_diacritics: false,
        }
    }

    /// Accept ASCII-folded input such as `kisi` for `kişi`.
    pub fn ignore_diacritics_in_analysis(mut self) -> Self {
        self.ignore_diacritics = true;
        self
    }

    pub fn build(self) -> TurkishMorphology {
        let graph = Arc::new(TurkishMorphotactics::new(self.lexicon));
        let analyzer = if self.ignore_diacritics {
            RuleBasedAnalyzer::ignore_diacritics(graph.clone())
        } else {
            RuleBasedAnalyzer::new(graph.clone())
        };
        TurkishMorphology { graph, analyzer }
    }
}

impl TurkishMorphology {
    pub fn builder(lexicon: RootLexicon) -> TurkishMorphologyBuilder {
        TurkishMorphologyBuilder::new(lexicon)
    }

    pub fn lexicon(&self) -> &RootLexicon {
        self.graph.lexicon()
    }

    /// Analyzes one word. Input is Turkish-lowercased and stripped of
    /// dots first; words carrying an apostrophe are analyzed with the
    /// apostrophe removed.
    pub fn analyze(&self, word: &str) -> WordAnalysis {
        if word.is_empty() {
            return WordAnalysis::empty(word);
        }

        let normalized = normalize_for_analysis(word);
        if normalized.is_empty() {
            return WordAnalysis::empty(word);
        }

        let alphabet = TurkishAlphabet::instance();
        if alphabet.contains_apostrophe(&normalized) {
            let normalized = alphabet.normalize_apostrophes(&normalized);
            let results = self.analyze_with_apostrophe(&normalized);
            return WordAnalysis::new(word, &normalized, results);
        }

        let mut results = self.analyzer.analyze(&normalized);
        if results.len() == 1 && results[0].is_unknown() {
            results.clear();
        }
        WordAnalysis::new(word, &normalized, results)
    }

    /// Like [`analyze`](Self::analyze) but never returns an empty result:
    /// unparseable input yields the unknown placeholder analysis.
    pub fn analyze_with_unknown(&self, word: &str) -> WordAnalysis {
        let analysis = self.analyze(word);
        if analysis.analysis_count() > 0 {
            return analysis;
        }
        let normalized = analysis.normalized_input.clone();
        let unknown = SingleAnalysis::unknown(&normalized);
        WordAnalysis::new(word, &normalized, vec![unknown])
    }

    pub fn has_analysis(&self, word: &str) -> bool {
        self.analyze(word)
            .results()
            .iter()
            .any(|r| !r.is_unknown())
    }

    /// Analyzes each whitespace separated token of `sentence`.
    pub fn analyze_sentence(&self, sentence: &str) -> Vec<WordAnalysis> {
        sentence
            .split_whitespace()
            .map(|token| self.analyze(token))
            .collect()
    }

    // A word like "Ankara'da" is analyzed without the quote. The quote
    // must sit strictly inside the word.
    fn analyze_with_apostrophe(&self, word: &str) -> Vec<SingleAnalysis> {
        let Some(index) = word.find('\'') else {
            return Vec::new();
        };
        if index == 0 || index == word.len() - 1 {
            return Vec::new();
        }
        let without_quote: String = word.chars().filter(|&c| c != '\'').collect();
        self.analyzer.analyze(&without_quote)
    }
}

/// Turkish-aware lowercasing plus dot removal. If removing dots empties
/// the word (it was all dots), the lowered form is kept.
fn normalize_for_analysis(word: &str) -> String {
    let lowered = alphabet::to_lower(word);
    let no_dot: String = lowered.chars().filter(|&c| c != '.').collect();
    if no_dot.is_empty() {
        lowered
    } else {
        no_dot
    }
}
