//! Rule-based morphological analysis for Turkish.
//!
//! The crate is organized around three layers:
//!
//! - [`lexicon`]: dictionary items and the root lexicon, with a text-format
//!   loader.
//! - [`morphotactics`]: the static suffix graph of morphemes, states,
//!   suffix templates, transition conditions and stem transitions.
//! - [`analysis`]: the runtime layer, surface synthesis, path search and
//!   the analysis result types.
//!
//! [`TurkishMorphology`] ties the layers together:
//!
//! ```no_run
//! use sarmal_morph::lexicon::RootLexicon;
//! use sarmal_morph::TurkishMorphology;
//!
//! let lexicon = RootLexicon::from_lines(["kitap", "gitmek [P:Verb]"]);
//! let morphology = TurkishMorphology::builder(lexicon).build();
//! for analysis in morphology.analyze("kitaplar").results() {
//!     println!("{}", analysis.format());
//! }
//! ```

pub mod analysis;
pub mod lexicon;
pub mod morphology;
pub mod morphotactics;

pub use analysis::single_analysis::SingleAnalysis;
pub use analysis::word_analysis::WordAnalysis;
pub use morphology::TurkishMorphology;
pub use morphotactics::graph::TurkishMorphotactics;
