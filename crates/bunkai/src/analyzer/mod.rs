//! analyzer module

pub mod affix_analyzer;

pub use affix_analyzer::{AffixAnalyzer, analyze};
