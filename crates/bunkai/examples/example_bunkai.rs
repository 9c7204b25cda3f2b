//! bunkai crate example
//!
//! Analyzes a handful of English words and keeps a small word list file
//! under `./.data/`.

use tracing_subscriber::EnvFilter;

use bunkai::BunkaiService;
use bunkai::config::{BunkaiConfig, ListConfig, LogLevel, LoggingConfig, StoreConfig};

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Analyzes one word and prints the decomposition.
fn print_analysis(service: &BunkaiService, word: &str) {
  println!("\nAnalysis (Word: \"{word}\"):");
  match service.analyze(word) {
    Some(analysis) => {
      println!("  segments: {}", analysis.visualize());
      let formatted = analysis.format();
      if formatted.is_empty() {
        println!("  affixes:  (none recognized)");
      } else {
        println!("  affixes:  {formatted}");
      }
    }
    None => println!("  too short to decompose"),
  }
}

fn main() -> AppResult<()> {
  // Initialize tracing_subscriber
  // Use RUST_LOG environment variable if set
  // Default: info for global, debug for bunkai
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bunkai=debug"));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  // 1. Build the configuration (word list under ./.data/)
  let config = BunkaiConfig {
    store: StoreConfig {
      data_file: Some("./.data/words.json".into()),
    },
    list: ListConfig {
      default_limit: 20,
      max_limit: 100,
    },
    logging: LoggingConfig {
      level: LogLevel::Debug,
    },
  };

  // 2. Initialize the service
  let service = BunkaiService::init(&config)?;
  println!("Word list file: {}", service.data_file().display());

  // 3. Analyze a few words
  for word in ["impossible", "transformation", "predictable", "unhappiness", "cat"] {
    print_analysis(&service, word);
  }

  // 4. Register the analyzed words
  println!("\n===== Register =====");
  for word in ["impossible", "transformation", "predictable"] {
    let saved = service.register_word(word, "https://example.com/article", None)?;
    println!("saved #{}: {}", saved.id, saved.text);
  }

  // 5. List the word list (newest first)
  println!("\n===== Word List =====");
  let page = service.list_words(0, None)?;
  println!("total: {}", page.total);
  for word in &page.words {
    println!("  #{} {} ({})", word.id, word.text, word.created_at);
  }

  // 6. Delete the newest entry and list again
  if let Some(newest) = page.words.first() {
    let deleted = service.delete_word(newest.id)?;
    println!("\ndeleted #{}: {}", deleted.id, deleted.text);
  }

  let page = service.list_words(0, None)?;
  println!("total after delete: {}", page.total);

  Ok(())
}
