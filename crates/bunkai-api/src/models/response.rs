//! Response Model Definition

use bunkai::lexicon::AffixEntry;
use bunkai::models::{Word, WordAnalysis, WordPage};
use serde::Serialize;

/// Stored Word (DTO)
///
/// Mirrors the on-disk record shape so browser extensions and the web
/// frontend can consume responses without field mapping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDto {
  /// Record identifier
  pub id: u64,
  /// The saved word or phrase
  pub text: String,
  /// URL of the page the word was collected from
  pub page_url: String,
  /// Creation timestamp (RFC 3339)
  pub created_at: String,
}

impl From<Word> for WordDto {
  fn from(word: Word) -> Self {
    Self {
      id: word.id,
      text: word.text,
      page_url: word.page_url,
      created_at: word.created_at,
    }
  }
}

/// Word List Response
#[derive(Debug, Serialize)]
pub struct WordListResponse {
  /// Requested page of words, newest first
  pub words: Vec<WordDto>,
  /// Total number of stored words (ignores pagination)
  pub total: usize,
}

impl From<WordPage> for WordListResponse {
  fn from(page: WordPage) -> Self {
    Self {
      words: page.words.into_iter().map(WordDto::from).collect(),
      total: page.total,
    }
  }
}

/// Matched Affix (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct AffixDto {
  /// Canonical form including its hyphen marker (e.g. "un-", "-tion")
  pub form: String,
  /// Human-readable gloss
  pub meaning: String,
}

impl From<AffixEntry> for AffixDto {
  fn from(entry: AffixEntry) -> Self {
    Self {
      form: entry.form.to_string(),
      meaning: entry.meaning.to_string(),
    }
  }
}

/// Affix Analysis Result (DTO)
#[derive(Debug, Serialize)]
pub struct AnalysisDto {
  /// Normalized word the analysis ran on
  pub word: String,
  /// Matched prefix
  #[serde(skip_serializing_if = "Option::is_none")]
  pub prefix: Option<AffixDto>,
  /// Matched root
  #[serde(skip_serializing_if = "Option::is_none")]
  pub root: Option<AffixDto>,
  /// Matched suffix
  #[serde(skip_serializing_if = "Option::is_none")]
  pub suffix: Option<AffixDto>,
  /// Word segments in reading order
  pub breakdown: Vec<String>,
  /// Display string, e.g. "in- (not) + -able (adjective/capable)"
  pub formatted: String,
  /// Segment visualization, e.g. "im | poss | ible"
  pub visualized: String,
}

impl From<WordAnalysis> for AnalysisDto {
  fn from(analysis: WordAnalysis) -> Self {
    let formatted = analysis.format();
    let visualized = analysis.visualize();
    Self {
      word: analysis.word,
      prefix: analysis.prefix.map(AffixDto::from),
      root: analysis.root.map(AffixDto::from),
      suffix: analysis.suffix.map(AffixDto::from),
      breakdown: analysis.breakdown,
      formatted,
      visualized,
    }
  }
}

/// Affix Analysis Response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  /// Analysis result (`None` when the input is too short to analyze)
  pub analysis: Option<AnalysisDto>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
  use super::*;
  use bunkai::AffixAnalyzer;

  #[test]
  fn word_dto_uses_camel_case_keys() {
    let dto = WordDto {
      id: 1,
      text: "serendipity".to_string(),
      page_url: "https://example.com/article".to_string(),
      created_at: "2026-03-01T00:00:00.000Z".to_string(),
    };

    let json = serde_json::to_string(&dto).unwrap();
    assert!(json.contains("\"id\":1"));
    assert!(json.contains("\"pageUrl\":\"https://example.com/article\""));
    assert!(json.contains("\"createdAt\":\"2026-03-01T00:00:00.000Z\""));
  }

  #[test]
  fn word_list_response_from_page() {
    let page = WordPage {
      words: vec![Word {
        id: 3,
        text: "undertake".to_string(),
        page_url: String::new(),
        created_at: "2026-03-01T00:00:00.000Z".to_string(),
      }],
      total: 12,
    };

    let response = WordListResponse::from(page);
    assert_eq!(response.words.len(), 1);
    assert_eq!(response.words[0].id, 3);
    assert_eq!(response.total, 12);
  }

  #[test]
  fn analysis_dto_from_analysis() {
    let analysis = AffixAnalyzer::new().analyze("impossible").unwrap();
    let dto = AnalysisDto::from(analysis);

    assert_eq!(dto.word, "impossible");
    assert_eq!(dto.prefix.as_ref().unwrap().form, "in-");
    assert_eq!(dto.suffix.as_ref().unwrap().form, "-able");
    assert_eq!(dto.breakdown, vec!["im", "poss", "ible"]);
    assert_eq!(dto.formatted, "in- (not) + -able (adjective/capable)");
    assert_eq!(dto.visualized, "im | poss | ible");
  }

  #[test]
  fn analyze_response_serialization_skips_missing_affixes() {
    let analysis = AffixAnalyzer::new().analyze("rexyztion").unwrap();
    let response = AnalyzeResponse {
      analysis: Some(AnalysisDto::from(analysis)),
      elapsed_ms: 7,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"elapsed_ms\":7"));
    assert!(json.contains("\"prefix\""));
    assert!(json.contains("\"suffix\""));
    // No root matched, so the field is omitted entirely
    assert!(!json.contains("\"root\""));
  }

  #[test]
  fn analyze_response_null_analysis() {
    let response = AnalyzeResponse {
      analysis: None,
      elapsed_ms: 0,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"analysis\":null"));
  }
}
