//! # tokenbridge-analysis
//!
//! The design-token engine: a catalog of named tokens, pattern-based
//! extraction of hardcoded style literals, exact and approximate token
//! matching with confidence scores, and in-place source rewriting.

pub mod aliases;
pub mod analyzer;
pub mod catalog;
pub mod extractor;
pub mod matcher;
pub mod source;
pub mod transformer;
pub mod values;

pub use analyzer::{ComponentAnalysis, ComponentAnalyzer};
pub use catalog::{TokenCatalog, TokenRef};
pub use extractor::Extractor;
pub use matcher::{TokenMatch, TokenMatcher};
pub use transformer::{TransformationResult, TransformationSummary, Transformer};
