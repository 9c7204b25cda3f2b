//! lexicon module

pub mod affix_table;

pub use affix_table::{AFFIX_TABLE, AffixEntry, AffixTable, strip_marker};
