//! store module

pub mod word_store;

pub use word_store::WordStore;
