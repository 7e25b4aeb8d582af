// Transition conditions: a small boolean algebra evaluated against a
// search path.

use std::sync::Arc;

use sarmal_core::{PhoneticAttribute, RootAttribute};

use crate::analysis::search_path::SearchPath;
use crate::lexicon::DictionaryItem;

use super::morpheme::Morpheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

/// A condition attached to a suffix transition. Conditions form a closed
/// sum; `and`/`or` flatten nested chains of the same operator so that
/// evaluation walks a flat list.
pub enum Condition {
    HasPhoneticAttribute(PhoneticAttribute),
    HasRootAttribute(RootAttribute),
    /// Input runes remain to be consumed.
    HasTail,
    /// Some suffix so far produced a non-empty surface.
    HasAnySuffixSurface,
    /// No surface was produced since the last derivation boundary.
    NoSurfaceAfterDerivation,
    DictionaryItemIs(Arc<DictionaryItem>),
    DictionaryItemIsAny(Vec<Arc<DictionaryItem>>),
    DictionaryItemIsNone(Vec<Arc<DictionaryItem>>),
    PreviousMorphemeIs(Arc<Morpheme>),
    Not(Box<Condition>),
    Combined { op: Operator, items: Vec<Condition> },
}

impl Condition {
    pub fn has_phonetic(attr: PhoneticAttribute) -> Condition {
        Condition::HasPhoneticAttribute(attr)
    }

    pub fn not_have_phonetic(attr: PhoneticAttribute) -> Condition {
        Condition::HasPhoneticAttribute(attr).not()
    }

    pub fn has_root_attribute(attr: RootAttribute) -> Condition {
        Condition::HasRootAttribute(attr)
    }

    pub fn not_have_root_attribute(attr: RootAttribute) -> Condition {
        Condition::HasRootAttribute(attr).not()
    }

    /// Shorthand for the common "no suffix surface yet" guard.
    pub fn has_no_surface() -> Condition {
        Condition::HasAnySuffixSurface.not()
    }

    pub fn not(self) -> Condition {
        Condition::Not(Box::new(self))
    }

    pub fn and(self, other: Condition) -> Condition {
        Condition::combine(Operator::And, self, other)
    }

    pub fn or(self, other: Condition) -> Condition {
        Condition::combine(Operator::Or, self, other)
    }

    pub fn and_not(self, other: Condition) -> Condition {
        self.and(other.not())
    }

    fn combine(op: Operator, left: Condition, right: Condition) -> Condition {
        let mut items = Vec::with_capacity(2);
        Condition::flatten_into(op, &mut items, left);
        Condition::flatten_into(op, &mut items, right);
        Condition::Combined { op, items }
    }

    fn flatten_into(op: Operator, items: &mut Vec<Condition>, condition: Condition) {
        match condition {
            Condition::Combined { op: inner_op, items: inner } if inner_op == op => {
                items.extend(inner);
            }
            other => items.push(other),
        }
    }

    /// Number of leaf conditions. Used as a specificity measure.
    pub fn count(&self) -> usize {
        match self {
            Condition::Combined { items, .. } => items.iter().map(Condition::count).sum(),
            _ => 1,
        }
    }

    pub fn accept(&self, path: &SearchPath) -> bool {
        match self {
            Condition::HasPhoneticAttribute(attr) => path.attributes().contains(*attr),
            Condition::HasRootAttribute(attr) => path.item().has_attribute(*attr),
            Condition::HasTail => !path.tail().is_empty(),
            Condition::HasAnySuffixSurface => path.contains_suffix_with_surface(),
            Condition::NoSurfaceAfterDerivation => {
                // Walk back from the last node; a derivation boundary before
                // any surfaced suffix means the current group is still bare.
                for node in path.nodes().iter().skip(1).rev() {
                    if node.derivative {
                        return true;
                    }
                    if !node.surface.is_empty() {
                        return false;
                    }
                }
                true
            }
            Condition::DictionaryItemIs(item) => path.item().id == item.id,
            Condition::DictionaryItemIsAny(items) => {
                items.iter().any(|i| i.id == path.item().id)
            }
            Condition::DictionaryItemIsNone(items) => {
                !items.iter().any(|i| i.id == path.item().id)
            }
            Condition::PreviousMorphemeIs(morpheme) => {
                path.previous_morpheme().is_some_and(|prev| **prev == **morpheme)
            }
            Condition::Not(inner) => !inner.accept(path),
            Condition::Combined { op, items } => match op {
                Operator::And => items.iter().all(|c| c.accept(path)),
                Operator::Or => items.iter().any(|c| c.accept(path)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_flattens_same_operator_chains() {
        let c = Condition::has_phonetic(PhoneticAttribute::LastLetterVowel)
            .and(Condition::has_phonetic(PhoneticAttribute::LastVowelBack))
            .and(Condition::HasTail);
        match &c {
            Condition::Combined { op: Operator::And, items } => assert_eq!(items.len(), 3),
            _ => panic!("expected flattened And"),
        }
        assert_eq!(c.count(), 3);
    }

    #[test]
    fn mixed_operators_do_not_flatten() {
        let c = Condition::HasTail
            .or(Condition::HasAnySuffixSurface)
            .and(Condition::has_phonetic(PhoneticAttribute::LastLetterVowel));
        match &c {
            Condition::Combined { op: Operator::And, items } => {
                assert_eq!(items.len(), 2);
                assert!(matches!(items[0], Condition::Combined { op: Operator::Or, .. }));
            }
            _ => panic!("expected And of [Or, leaf]"),
        }
        assert_eq!(c.count(), 3);
    }

    #[test]
    fn not_counts_as_one_leaf() {
        let c = Condition::has_no_surface();
        assert_eq!(c.count(), 1);
    }
}
