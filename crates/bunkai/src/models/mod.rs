//! models module

pub mod model_definition;

pub use model_definition::{Word, WordAnalysis, WordPage};
