// Breadth-first search over the morphotactic graph.

use std::sync::Arc;

use hashbrown::HashMap;

use sarmal_core::{PhoneticAttribute, TurkishAlphabet};

use crate::morphotactics::template::SuffixTemplateToken;
use crate::morphotactics::TurkishMorphotactics;

use super::search_path::SearchPath;
use super::single_analysis::SingleAnalysis;
use super::surface::generate_surface;

// Paths beyond this count trigger cyclic pruning.
const MAX_PATH_COUNT: usize = 30;
// A state visited more than this often on one path marks it cyclic.
const MAX_STATE_REVISITS: usize = 3;

/// Rule based analyzer: seeds search paths from stem prefix matches and
/// walks the graph until every path either dies or terminates.
pub struct RuleBasedAnalyzer {
    graph: Arc<TurkishMorphotactics>,
    ascii_tolerant: bool,
}

impl RuleBasedAnalyzer {
    pub fn new(graph: Arc<TurkishMorphotactics>) -> Self {
        Self {
            graph,
            ascii_tolerant: false,
        }
    }

    /// Analyzer that treats ASCII-folded input as matching its dotted and
    /// accented counterparts (kisi ~ kişi).
    pub fn ignore_diacritics(graph: Arc<TurkishMorphotactics>) -> Self {
        Self {
            graph,
            ascii_tolerant: true,
        }
    }

    pub fn analyze(&self, input: &str) -> Vec<SingleAnalysis> {
        let candidates = self.graph.prefix_matches(input, self.ascii_tolerant);

        let mut paths = Vec::with_capacity(candidates.len());
        for stem in candidates {
            let tail: String = input.chars().skip(stem.surface.chars().count()).collect();
            let state = self.graph.state(stem.to);
            paths.push(SearchPath::initial(stem, &tail, state));
        }

        self.search(paths)
            .iter()
            .map(SingleAnalysis::from_search_path)
            .collect()
    }

    fn search(&self, mut current: Vec<SearchPath>) -> Vec<SearchPath> {
        let mut result = Vec::new();

        while !current.is_empty() {
            if current.len() > MAX_PATH_COUNT {
                current = prune_cyclic_paths(current);
            }

            let mut next = Vec::new();
            for path in &current {
                if path.tail().is_empty()
                    && path.is_terminal()
                    && !path
                        .attributes()
                        .contains(PhoneticAttribute::CannotTerminate)
                {
                    result.push(path.clone());
                    continue;
                }
                self.advance(path, &mut next);
            }
            current = next;
        }

        result
    }

    fn advance(&self, path: &SearchPath, out: &mut Vec<SearchPath>) {
        let alphabet = TurkishAlphabet::instance();
        let state = self.graph.state(path.current_state());

        for &transition_id in &state.outgoing {
            let transition = self.graph.transition(transition_id);

            // Epsilon transitions carry the attributes forward unchanged.
            if !transition.has_surface() {
                if transition.can_pass(path) {
                    let to = self.graph.state(transition.to);
                    out.push(path.advance(String::new(), transition.to, to, path.attributes()));
                }
                continue;
            }

            if path.tail().is_empty() {
                continue;
            }

            let surface = generate_surface(transition, path.attributes());

            let tail_starts_with = if self.ascii_tolerant {
                alphabet.starts_with_ignore_diacritics(path.tail(), &surface)
            } else {
                path.tail().starts_with(&surface)
            };
            if !tail_starts_with {
                continue;
            }

            if !transition.can_pass(path) {
                continue;
            }

            // When the surface consumes the whole tail the attributes are
            // only inspected for termination, so the recalculation can be
            // skipped.
            let tail_equals_surface = if self.ascii_tolerant {
                alphabet.equals_ignore_diacritics(path.tail(), &surface)
            } else {
                path.tail() == surface
            };
            let mut attributes = if tail_equals_surface {
                path.attributes()
            } else {
                super::phonetics::morphemic_attributes(&surface, path.attributes())
            };

            attributes.remove(PhoneticAttribute::CannotTerminate);
            match transition.last_token() {
                Some(SuffixTemplateToken::LastVoiced(_)) => {
                    attributes.add(PhoneticAttribute::ExpectsConsonant);
                }
                Some(SuffixTemplateToken::LastNotVoiced(_)) => {
                    attributes.add(PhoneticAttribute::ExpectsVowel);
                    attributes.add(PhoneticAttribute::CannotTerminate);
                }
                _ => {}
            }

            let to = self.graph.state(transition.to);
            out.push(path.advance(surface, transition.to, to, attributes));
        }
    }
}

/// Drops paths that visited any single state more than
/// `MAX_STATE_REVISITS` times.
fn prune_cyclic_paths(paths: Vec<SearchPath>) -> Vec<SearchPath> {
    paths
        .into_iter()
        .filter(|path| {
            let mut counts: HashMap<crate::morphotactics::StateId, usize> = HashMap::new();
            for node in path.nodes() {
                let count = counts.entry(node.state).or_insert(0);
                *count += 1;
                if *count > MAX_STATE_REVISITS {
                    return false;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::RootLexicon;

    fn analyzer(lines: &[&str]) -> RuleBasedAnalyzer {
        let lexicon = RootLexicon::from_lines(lines.iter().copied());
        RuleBasedAnalyzer::new(Arc::new(TurkishMorphotactics::new(lexicon)))
    }

    #[test]
    fn bare_noun_analyzes_as_nominal() {
        let a = analyzer(&["kitap"]);
        let results = a.analyze("kitap");
        assert_eq!(results.len(), 1);
        assert!(results[0].contains_morpheme("A3sg"));
        // Pnon and Nom are dropped from the result chain.
        assert!(!results[0].contains_morpheme("Nom"));
    }

    #[test]
    fn plural_and_case_chain() {
        let a = analyzer(&["ev"]);
        let results = a.analyze("evlerden");
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert!(r.contains_morpheme("A3pl"));
        assert!(r.contains_morpheme("Abl"));
    }

    #[test]
    fn voiced_stem_cannot_terminate() {
        let a = analyzer(&["kitap [A:Voicing]"]);
        // The voiced stem variant only matches when a vowel-initial suffix
        // follows; bare "kitab" must not analyze.
        assert!(a.analyze("kitab").is_empty());
        let results = a.analyze("kitabı");
        assert!(!results.is_empty());
        assert!(results.iter().any(|r| r.contains_morpheme("Acc") || r.contains_morpheme("P3sg")));
    }

    #[test]
    fn unvoiced_surface_rejected_after_vowel_suffix() {
        let a = analyzer(&["kitap [A:Voicing]"]);
        assert!(a.analyze("kitapı").is_empty());
    }

    #[test]
    fn verb_past_tense_with_agreement() {
        let a = analyzer(&["gelmek [P:Verb]"]);
        let results = a.analyze("geldim");
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert!(r.contains_morpheme("Past"));
        assert!(r.contains_morpheme("A1sg"));
    }

    #[test]
    fn progressive_on_simple_stem() {
        let a = analyzer(&["gitmek [P:Verb; A:Voicing]"]);
        let results = a.analyze("gidiyorum");
        assert!(!results.is_empty());
        assert!(results[0].contains_morpheme("Prog1"));
        assert!(results[0].contains_morpheme("A1sg"));
    }

    #[test]
    fn unknown_word_yields_nothing() {
        let a = analyzer(&["ev"]);
        assert!(a.analyze("xyz").is_empty());
        assert!(a.analyze("").is_empty());
    }

    #[test]
    fn ascii_tolerant_analysis() {
        let lexicon = RootLexicon::from_lines(["kişi"]);
        let a = RuleBasedAnalyzer::ignore_diacritics(Arc::new(TurkishMorphotactics::new(lexicon)));
        let results = a.analyze("kisiler");
        assert!(!results.is_empty());
        assert!(results[0].contains_morpheme("A3pl"));
    }
}
