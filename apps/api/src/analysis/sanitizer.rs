//! Response Sanitizer: pulls a JSON object out of free-form model text.
//!
//! Best effort only. The no-brace fallback swaps `"` for `'` and escapes
//! nothing else, so backslashes or control characters in the raw text can
//! still produce invalid JSON; the decoder turns that into a fallback result.

/// Returned when the model produced no text at all.
pub const EMPTY_OBJECT: &str = "{}";

/// Returns the candidate JSON text for `raw`.
///
/// - absent or empty → `{}`
/// - first `{` .. last `}` when both exist in that order → that slice, inclusive
/// - otherwise → `{ "summary": "<raw with \" replaced by '>" }`
pub fn sanitize(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(text) if !text.is_empty() => text,
        _ => return EMPTY_OBJECT.to_string(),
    };

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if end > start {
            return raw[start..=end].to_string();
        }
    }

    format!("{{ \"summary\": \"{}\" }}", raw.replace('"', "'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_prose_around_braces() {
        assert_eq!(sanitize(Some("blah blah {\"a\":1} end")), "{\"a\":1}");
    }

    #[test]
    fn test_keeps_nested_objects_between_outermost_braces() {
        let raw = "Here is your JSON:\n```json\n{\"matchScore\": {\"overall\": 80.0}}\n```";
        assert_eq!(sanitize(Some(raw)), "{\"matchScore\": {\"overall\": 80.0}}");
    }

    #[test]
    fn test_wraps_text_without_braces_as_summary() {
        assert_eq!(sanitize(Some("no json here")), "{ \"summary\": \"no json here\" }");
    }

    #[test]
    fn test_replaces_double_quotes_in_wrapped_text() {
        assert_eq!(
            sanitize(Some("the \"best\" fit")),
            "{ \"summary\": \"the 'best' fit\" }"
        );
    }

    #[test]
    fn test_backslashes_are_not_escaped() {
        assert_eq!(sanitize(Some(r"C:\path")), r#"{ "summary": "C:\path" }"#);
    }

    #[test]
    fn test_closing_brace_before_opening_brace_is_wrapped() {
        assert_eq!(sanitize(Some("} oops {")), "{ \"summary\": \"} oops {\" }");
    }

    #[test]
    fn test_absent_or_empty_yields_empty_object() {
        assert_eq!(sanitize(None), "{}");
        assert_eq!(sanitize(Some("")), "{}");
    }
}
