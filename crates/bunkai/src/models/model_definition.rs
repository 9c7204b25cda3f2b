//! Data Model Definitions
//!
//! Core data structures shared across the crate: saved vocabulary entries,
//! list pages, and the result of an affix analysis. Persistence and the
//! HTTP layer both speak the camelCase wire form defined here.

use serde::{Deserialize, Serialize};

use crate::lexicon::AffixEntry;

/// A saved vocabulary entry.
///
/// Serialized in camelCase, which is also the on-disk format of the word
/// list file. `created_at` is kept as an opaque timestamp string: values
/// minted by the store are RFC 3339 UTC, but caller-supplied values are
/// stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
  /// Identifier unique within one word list file
  pub id: u64,

  /// The saved word or phrase, already trimmed
  pub text: String,

  /// URL of the page the word was collected from (may be empty)
  pub page_url: String,

  /// Creation timestamp as an opaque string
  pub created_at: String,
}

/// One page of a word listing together with the total count.
///
/// `total` is the number of words in the whole list, not in this page,
/// so clients can paginate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPage {
  /// Words in this page, newest first
  pub words: Vec<Word>,

  /// Total number of words in the list
  pub total: usize,
}

/// Result of decomposing a single word into affixes.
///
/// `breakdown` holds the surface segments of the normalized word in
/// left-to-right order; concatenating them restores the normalized input.
/// The matched entries reference the static lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordAnalysis {
  /// The normalized word that was analyzed
  pub word: String,

  /// Matched prefix entry, if any
  pub prefix: Option<AffixEntry>,

  /// Matched root entry, if any (label only; roots are not consumed)
  pub root: Option<AffixEntry>,

  /// Matched suffix entry, if any
  pub suffix: Option<AffixEntry>,

  /// Surface segments of the word, in order
  pub breakdown: Vec<String>,
}

impl WordAnalysis {
  /// Renders the matched affixes as a human-readable summary.
  ///
  /// Each matched entry appears as `"<form> (<meaning>)"` using the
  /// canonical form with its hyphen marker, joined by `" + "` in
  /// prefix → root → suffix order. Returns an empty string when nothing
  /// matched.
  #[must_use]
  pub fn format(&self) -> String {
    let mut parts = Vec::new();
    for entry in [&self.prefix, &self.root, &self.suffix].into_iter().flatten() {
      parts.push(format!("{} ({})", entry.form, entry.meaning));
    }
    parts.join(" + ")
  }

  /// Renders the breakdown segments joined by `" | "`.
  #[must_use]
  pub fn visualize(&self) -> String {
    self.breakdown.join(" | ")
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
