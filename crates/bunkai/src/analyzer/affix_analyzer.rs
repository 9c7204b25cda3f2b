//! Affix decomposition for English words
//!
//! Splits a word into prefix, middle, and suffix segments by matching the
//! static lexicon. Matching is first-match in table declaration order,
//! not longest-match: earlier entries take priority even when a later
//! entry would cover a longer substring.

use tracing::debug;

use crate::lexicon::{AFFIX_TABLE, AffixEntry, AffixTable, strip_marker};
use crate::models::WordAnalysis;

/// Minimum character count of the normalized word; shorter inputs are
/// not decomposed
const MIN_WORD_CHARS: usize = 3;

/// Minimum character count of the middle segment for root lookup
const MIN_ROOT_CHARS: usize = 2;

/// Affix analyzer over a static lexicon
///
/// - Stateless (only holds a table reference)
/// - `Copy + Send + Sync`, safe to call concurrently without locking
/// - Every analysis is recomputed from the input and the table
#[derive(Debug, Clone, Copy)]
pub struct AffixAnalyzer {
  table: &'static AffixTable,
}

impl AffixAnalyzer {
  /// Constructs an analyzer over the built-in lexicon.
  #[must_use]
  pub fn new() -> Self {
    Self::with_table(&AFFIX_TABLE)
  }

  /// Constructs an analyzer over a caller-supplied table.
  ///
  /// The table must live for the whole program; in practice this is a
  /// `static`. Useful for pinning matching behavior in tests.
  #[must_use]
  pub fn with_table(table: &'static AffixTable) -> Self {
    Self { table }
  }

  /// Decomposes one word into affix segments.
  ///
  /// The input is trimmed and lowercased first; all matching runs against
  /// that normalized form. Returns `None` only when the normalized word is
  /// shorter than 3 characters. Any longer input yields an analysis, even
  /// if no table entry matched (the whole word then stands as a single
  /// unlabeled segment).
  ///
  /// Three passes over the remaining substring:
  /// 1. prefix: starts-with over `prefixes`, first match consumes its
  ///    matched surface length (a variant may be shorter or longer than
  ///    the canonical form)
  /// 2. suffix: ends-with over `suffixes` against the remainder, same
  ///    first-match and consumption rules
  /// 3. root: substring containment over `roots` against the middle,
  ///    label only; the middle segment is never re-split
  ///
  /// A form never consumes the entire string it is matched against, so
  /// the middle segment stays non-empty and concatenating `breakdown`
  /// always reproduces the normalized word.
  pub fn analyze(&self, word: &str) -> Option<WordAnalysis> {
    let normalized = word.trim().to_lowercase();
    if normalized.chars().count() < MIN_WORD_CHARS {
      debug!(input = %word, "Input too short to decompose");
      return None;
    }

    // ─── Prefix pass ───
    let prefix = find_prefix(self.table.prefixes, &normalized);
    let after_prefix = match &prefix {
      Some((_, bare)) => &normalized[bare.len()..],
      None => normalized.as_str(),
    };

    // ─── Suffix pass (on the remainder) ───
    let suffix = find_suffix(self.table.suffixes, after_prefix);
    let (middle, suffix_segment) = match &suffix {
      // ends_with guarantees the split point is a character boundary
      Some((_, bare)) => after_prefix.split_at(after_prefix.len() - bare.len()),
      None => (after_prefix, ""),
    };

    // ─── Root pass (labels the middle, never shrinks it) ───
    let root = if middle.chars().count() >= MIN_ROOT_CHARS {
      find_root(self.table.roots, middle)
    } else {
      None
    };

    let mut breakdown = Vec::with_capacity(3);
    if let Some((_, bare)) = &prefix {
      breakdown.push((*bare).to_string());
    }
    if !middle.is_empty() {
      breakdown.push(middle.to_string());
    }
    if !suffix_segment.is_empty() {
      breakdown.push(suffix_segment.to_string());
    }

    // An empty breakdown means no analysis
    if breakdown.is_empty() {
      return None;
    }

    let analysis = WordAnalysis {
      word: normalized,
      prefix: prefix.map(|(entry, _)| entry),
      root,
      suffix: suffix.map(|(entry, _)| entry),
      breakdown,
    };

    debug!(
      word = %analysis.word,
      prefix = analysis.prefix.map(|e| e.form),
      root = analysis.root.map(|e| e.form),
      suffix = analysis.suffix.map(|e| e.form),
      segments = analysis.breakdown.len(),
      "Affix analysis completed"
    );

    Some(analysis)
  }
}

impl Default for AffixAnalyzer {
  fn default() -> Self {
    Self::new()
  }
}

/// Decomposes one word using the built-in lexicon.
///
/// Convenience wrapper around [`AffixAnalyzer::analyze`].
pub fn analyze(word: &str) -> Option<WordAnalysis> {
  AffixAnalyzer::new().analyze(word)
}

/// Finds the first prefix entry whose bare form starts the word.
///
/// Scans entries in declaration order, trying the canonical form before
/// its variants. A form matches only when the word is strictly longer
/// than the form, so a prefix cannot consume the whole word. Returns the
/// entry together with the bare surface form that actually matched.
fn find_prefix(
  entries: &'static [AffixEntry],
  word: &str,
) -> Option<(AffixEntry, &'static str)> {
  for entry in entries {
    for surface in entry.surface_forms() {
      let bare = strip_marker(surface);
      if word.starts_with(bare) && word.len() > bare.len() {
        return Some((*entry, bare));
      }
    }
  }
  None
}

/// Finds the first suffix entry whose bare form ends the remainder.
///
/// Same policy as [`find_prefix`] with ends-with matching: the remainder
/// must be strictly longer than the form, so a suffix cannot consume the
/// whole remainder.
fn find_suffix(
  entries: &'static [AffixEntry],
  remainder: &str,
) -> Option<(AffixEntry, &'static str)> {
  for entry in entries {
    for surface in entry.surface_forms() {
      let bare = strip_marker(surface);
      if remainder.ends_with(bare) && remainder.len() > bare.len() {
        return Some((*entry, bare));
      }
    }
  }
  None
}

/// Finds the first root entry contained anywhere in the middle segment.
///
/// Containment is not anchored: "predictable" yields the middle "dict",
/// which contains the root "dic". The match labels the middle only; the
/// segment itself is kept whole.
fn find_root(entries: &'static [AffixEntry], middle: &str) -> Option<AffixEntry> {
  for entry in entries {
    for surface in entry.surface_forms() {
      if middle.contains(strip_marker(surface)) {
        return Some(*entry);
      }
    }
  }
  None
}
