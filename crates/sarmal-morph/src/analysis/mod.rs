//! The analysis runtime: phonetic attribute computation, surface
//! synthesis, path search and result types.

pub mod analyzer;
pub mod phonetics;
pub mod search_path;
pub mod single_analysis;
pub mod surface;
pub mod word_analysis;

pub use analyzer::RuleBasedAnalyzer;
pub use search_path::SearchPath;
pub use single_analysis::{MorphemeData, SingleAnalysis};
pub use word_analysis::WordAnalysis;
