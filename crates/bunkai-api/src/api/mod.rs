//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{
  delete_all_words, delete_word, get_words, health_check, post_analyze, post_word,
};
pub use routes::{create_router, run_server};
pub use state::AppState;
