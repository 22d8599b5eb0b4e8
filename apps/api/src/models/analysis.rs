use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Four-part compatibility score reported by the model, each nominally 0–100.
///
/// `overall` is expected to equal `0.5*skills + 0.3*experience + 0.2*education`
/// rounded to one decimal, but only the prompt asks for that. Values are taken
/// as the model returns them: no recomputation, no clamping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchScore {
    #[serde(deserialize_with = "lenient_f64")]
    pub overall: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub skills_match: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub experience_match: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub education_match: f64,
}

/// Per-job analysis returned to the caller. Field order is the wire order.
///
/// Every field is optional on input: anything the model omits, sends as
/// `null` or sends with an unusable type takes its default, and unknown fields
/// are ignored. Numbers and booleans are accepted where text is expected, and
/// numeric strings where a score is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub employment_type: String,
    #[serde(deserialize_with = "lenient_score")]
    pub match_score: MatchScore,
    #[serde(deserialize_with = "lenient_string_list")]
    pub matching_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub missing_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub why_fit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub growth_areas: String,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
}

impl AnalysisResult {
    /// Degraded entry carrying only a diagnostic summary.
    pub fn fallback(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }
}

// Field deserializers below read any well-formed JSON value. Only a syntax
// error in the document can make decoding fail.

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or_default(),
        _ => 0.0,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<MatchScore, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => MatchScore::deserialize(value).unwrap_or_default(),
        _ => MatchScore::default(),
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
