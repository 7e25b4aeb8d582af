//! Shared types for Sarmal Turkish morphology.
//!
//! This crate holds the alphabet layer and the small enum/bit-set types
//! that both the morphotactic graph and the analyzer operate on:
//!
//! - [`letter`] -- Turkic letter table entries with phonological flags
//! - [`alphabet`] -- the Turkish alphabet singleton (case rules, voicing
//!   maps, diacritic folding)
//! - [`phonetics`] -- phonetic attribute tags and their bit-set
//! - [`root_attribute`] -- per-dictionary-item root attribute tags
//! - [`pos`] -- primary and secondary part-of-speech tags

pub mod alphabet;
pub mod letter;
pub mod phonetics;
pub mod pos;
pub mod root_attribute;

pub use alphabet::TurkishAlphabet;
pub use letter::TurkicLetter;
pub use phonetics::{PhoneticAttribute, PhoneticAttributeSet};
pub use pos::{PrimaryPos, SecondaryPos};
pub use root_attribute::{RootAttribute, RootAttributeSet};
