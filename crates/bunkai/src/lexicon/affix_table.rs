//! Affix Lexicon Definition
//!
//! Curated table of English prefixes, roots, and suffixes used by the
//! analyzer. The table is process-wide static data: loaded once, never
//! mutated. Declaration order is significant: matching scans each
//! collection top to bottom and the first hit wins, so reordering entries
//! changes analysis results.

use serde::Serialize;

/// A single lexicon entry.
///
/// The same flat shape is used for all three categories. `form` is the
/// canonical spelling as listed: prefixes carry a trailing hyphen marker
/// (`"un-"`), suffixes a leading one (`"-tion"`), roots none (`"act"`).
/// Markers only indicate position; matching strips them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AffixEntry {
  /// Canonical form, including the positional hyphen marker
  pub form: &'static str,

  /// Human-readable gloss
  pub meaning: &'static str,

  /// Alternate surface spellings in priority order (e.g. "im-" for "in-")
  pub variants: &'static [&'static str],
}

impl AffixEntry {
  /// Returns the canonical form with its hyphen marker stripped.
  pub fn bare_form(&self) -> &'static str {
    strip_marker(self.form)
  }

  /// Iterates every surface form of this entry: the canonical form first,
  /// then the variants in declared order. Hyphen markers are NOT stripped.
  pub fn surface_forms(&self) -> impl Iterator<Item = &'static str> {
    std::iter::once(self.form).chain(self.variants.iter().copied())
  }
}

/// Strips the positional hyphen marker from a listed form.
///
/// # Examples
/// - `"un-"` → `"un"`
/// - `"-tion"` → `"tion"`
/// - `"act"` → `"act"` (roots carry no marker)
pub fn strip_marker(form: &str) -> &str {
  form.trim_matches('-')
}

/// The three ordered, read-only collections of the lexicon.
#[derive(Debug, Clone, Copy)]
pub struct AffixTable {
  /// Prefix entries in matching priority order
  pub prefixes: &'static [AffixEntry],

  /// Root entries in matching priority order
  pub roots: &'static [AffixEntry],

  /// Suffix entries in matching priority order
  pub suffixes: &'static [AffixEntry],
}

/// Compact constructor for table rows.
const fn entry(
  form: &'static str,
  meaning: &'static str,
  variants: &'static [&'static str],
) -> AffixEntry {
  AffixEntry {
    form,
    meaning,
    variants,
  }
}

/// The built-in affix table.
///
/// Entry order is part of the contract: "un-" precedes "under-", so a word
/// like "undertake" resolves to the "un-" prefix. Keep insertions at the
/// end of a collection unless a priority change is intended.
pub static AFFIX_TABLE: AffixTable = AffixTable {
  prefixes: PREFIXES,
  roots: ROOTS,
  suffixes: SUFFIXES,
};

static PREFIXES: &[AffixEntry] = &[
  entry("un-", "not", &[]),
  entry("in-", "not", &["im-", "il-", "ir-"]),
  entry("dis-", "not/opposite", &[]),
  entry("re-", "again", &[]),
  entry("de-", "remove/reverse", &[]),
  entry("inter-", "between", &[]),
  entry("sub-", "under", &[]),
  entry("super-", "above", &[]),
  entry("trans-", "across", &[]),
  entry("pre-", "before", &[]),
  entry("post-", "after", &[]),
  entry("mono-", "one", &[]),
  entry("bi-", "two", &[]),
  entry("multi-", "many", &[]),
  entry("over-", "excessive", &[]),
  entry("under-", "insufficient", &[]),
];

static ROOTS: &[AffixEntry] = &[
  entry("act", "do", &[]),
  entry("duc", "lead", &["duct"]),
  entry("fac", "make", &["fact"]),
  entry("fer", "carry", &[]),
  entry("mit", "send", &["miss"]),
  entry("scrib", "write", &["script"]),
  entry("dic", "say", &["dict"]),
  entry("vid", "see", &["vis"]),
  entry("cap", "take", &["cept"]),
  entry("cog", "know", &["gno"]),
  entry("struct", "build", &[]),
  entry("port", "carry", &[]),
  entry("grad", "step/go", &["gress"]),
  entry("form", "shape", &[]),
  entry("temp", "time", &[]),
  entry("loc", "place", &[]),
  entry("bio", "life", &[]),
  entry("therm", "heat", &[]),
  entry("photo", "light", &[]),
  entry("geo", "earth", &[]),
];

static SUFFIXES: &[AffixEntry] = &[
  entry("-tion", "noun/action", &["-sion"]),
  entry("-ment", "noun/result", &[]),
  entry("-ity", "noun/quality", &[]),
  entry("-ness", "noun/state", &[]),
  entry("-er", "person", &["-or"]),
  entry("-ist", "specialist", &[]),
  entry("-able", "adjective/capable", &["-ible"]),
  entry("-ive", "adjective/quality", &[]),
  entry("-al", "adjective/related to", &[]),
  entry("-ous", "adjective/full of", &[]),
  entry("-ly", "adverb", &[]),
  entry("-ize", "verb/make", &["-ise"]),
  entry("-ify", "verb/make", &[]),
  entry("-en", "verb/make", &[]),
];

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
