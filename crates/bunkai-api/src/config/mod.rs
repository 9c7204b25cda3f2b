//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT, MAX_TEXT_LENGTH};
pub use env::Config;
