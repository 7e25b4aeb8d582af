// Analysis results for one input word.

use std::fmt;

use super::single_analysis::SingleAnalysis;

/// All analyses produced for a word, together with the raw input and the
/// normalized form the analyzer actually consumed.
#[derive(Debug, Clone)]
pub struct WordAnalysis {
    pub input: String,
    pub normalized_input: String,
    results: Vec<SingleAnalysis>,
}

impl WordAnalysis {
    pub fn new(input: &str, normalized_input: &str, results: Vec<SingleAnalysis>) -> Self {
        Self {
            input: input.to_string(),
            normalized_input: normalized_input.to_string(),
            results,
        }
    }

    pub fn empty(input: &str) -> Self {
        Self::new(input, input, Vec::new())
    }

    /// True if at least one analysis exists and none of them is the
    /// unknown placeholder.
    pub fn is_correct(&self) -> bool {
        !self.results.is_empty() && !self.results.iter().any(|r| r.is_unknown())
    }

    pub fn analysis_count(&self) -> usize {
        self.results.len()
    }

    pub fn results(&self) -> &[SingleAnalysis] {
        &self.results
    }

    pub fn into_results(self) -> Vec<SingleAnalysis> {
        self.results
    }
}

impl<'a> IntoIterator for &'a WordAnalysis {
    type Item = &'a SingleAnalysis;
    type IntoIter = std::slice::Iter<'a, SingleAnalysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl fmt::Display for WordAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordAnalysis{{input='{}', results=[", self.input)?;
        for (i, r) in self.results.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{r}")?;
        }
        write!(f, "]}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_analysis_is_not_correct() {
        let wa = WordAnalysis::empty("zzz");
        assert!(!wa.is_correct());
        assert_eq!(wa.analysis_count(), 0);
    }

    #[test]
    fn unknown_result_is_not_correct() {
        let wa = WordAnalysis::new("zzz", "zzz", vec![SingleAnalysis::unknown("zzz")]);
        assert!(!wa.is_correct());
        assert_eq!(wa.analysis_count(), 1);
    }
}
