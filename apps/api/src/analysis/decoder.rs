//! Result Decoder: turns sanitized JSON into an `AnalysisResult`.
//!
//! Never fails: a JSON syntax error becomes `AnalysisOutcome::Fallback`
//! carrying the parser's message in `summary`. Well-formed values of the wrong
//! type are coerced or defaulted field by field. Values are not range- or
//! enum-checked.

use crate::models::analysis::AnalysisResult;

/// Prefix of the `summary` written into fallback results.
pub const PARSE_FAILURE_PREFIX: &str = "Failed to parse AI output: ";

/// Outcome of decoding one model response.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Parsed(AnalysisResult),
    /// Only `summary` is set, with the parse diagnostic.
    Fallback(AnalysisResult),
}

impl AnalysisOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::Fallback(_))
    }

    /// The wire value. Fallbacks are not flagged; only `summary` tells them apart.
    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisOutcome::Parsed(result) | AnalysisOutcome::Fallback(result) => result,
        }
    }
}

pub fn decode(candidate: &str) -> AnalysisOutcome {
    match serde_json::from_str::<AnalysisResult>(candidate) {
        Ok(result) => AnalysisOutcome::Parsed(result),
        Err(e) => AnalysisOutcome::Fallback(AnalysisResult::fallback(format!(
            "{PARSE_FAILURE_PREFIX}{e}"
        ))),
    }
}
