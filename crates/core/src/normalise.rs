//! Shaping of raw model text into an [`AnalysisResult`].

use serde_json::Value;

use crate::analysis::AnalysisResult;

/// Which branch produced a normalised result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed,
    Fallback,
}

/// Strip a markdown code fence wrapped around the model output.
///
/// Recognises a fence tagged ```` ```json ```` or an untagged ```` ``` ````. The opening
/// fence is only removed when it is followed by a newline, and the closing fence only when
/// it is preceded by one. Text without a leading fence is returned trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let opening = if trimmed.starts_with("```json") {
        "```json\n"
    } else if trimmed.starts_with("```") {
        "```\n"
    } else {
        return trimmed;
    };

    let body = trimmed.strip_prefix(opening).unwrap_or(trimmed);
    body.strip_suffix("\n```").unwrap_or(body)
}

/// Parse model text into an [`AnalysisResult`], never failing.
///
/// Any valid JSON is kept exactly as parsed; field names and types are not checked. When
/// the fence-stripped text is not JSON, the fallback result carries the raw text
/// (unstripped) as its only condition's description.
pub fn normalise(raw: &str) -> (AnalysisResult, ParseOutcome) {
    let cleaned = strip_code_fence(raw);
    match serde_json::from_str::<Value>(cleaned) {
        Ok(value) => (AnalysisResult::from_value(value), ParseOutcome::Parsed),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse AI response as JSON, using fallback");
            (AnalysisResult::fallback(raw), ParseOutcome::Fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Likelihood;
    use crate::constants::{FALLBACK_DISCLAIMER, FALLBACK_RECOMMENDATIONS};
    use serde_json::json;

    const BODY: &str = r#"{"probable_conditions":[{"name":"Viral infection","likelihood":"medium","description":"Common cause of fever and fatigue"}],"recommendations":"Rest and hydrate","disclaimer":"Educational only"}"#;

    #[test]
    fn test_strip_tagged_fence() {
        let fenced = format!("```json\n{BODY}\n```");
        assert_eq!(strip_code_fence(&fenced), BODY);
    }

    #[test]
    fn test_strip_untagged_fence() {
        let fenced = format!("  ```\n{BODY}\n```\n");
        assert_eq!(strip_code_fence(&fenced), BODY);
    }

    #[test]
    fn test_unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fence("no fence here"), "no fence here");
    }

    #[test]
    fn test_fenced_and_plain_parse_identically() {
        let (plain, _) = normalise(BODY);
        for wrapped in [format!("```json\n{BODY}\n```"), format!("```\n{BODY}\n```")] {
            let (parsed, outcome) = normalise(&wrapped);
            assert_eq!(outcome, ParseOutcome::Parsed);
            assert_eq!(parsed, plain);
        }
    }

    #[test]
    fn test_valid_json_is_returned_verbatim() {
        let (result, outcome) = normalise(BODY);
        assert_eq!(outcome, ParseOutcome::Parsed);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::from_str::<Value>(BODY).unwrap()
        );
    }

    #[test]
    fn test_prose_falls_back_with_raw_text() {
        let raw = "You may have a cold. Drink fluids.";
        let (result, outcome) = normalise(raw);

        assert_eq!(outcome, ParseOutcome::Fallback);
        let conditions = result.conditions();
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].likelihood, Some(Likelihood::Unknown));
        assert_eq!(conditions[0].description.as_deref(), Some(raw));
        assert_eq!(result.recommendations().as_deref(), Some(FALLBACK_RECOMMENDATIONS));
        assert_eq!(result.disclaimer().as_deref(), Some(FALLBACK_DISCLAIMER));
    }

    #[test]
    fn test_fence_without_newline_falls_back() {
        let raw = format!("```json{BODY}```");
        let (result, outcome) = normalise(&raw);
        assert_eq!(outcome, ParseOutcome::Fallback);
        assert_eq!(result.conditions()[0].description.as_deref(), Some(raw.as_str()));
    }

    #[test]
    fn test_unexpected_field_types_are_returned_verbatim() {
        let raw = r#"{"probable_conditions":[{"name":5,"likelihood":null,"description":"d"}],"recommendations":["Rest","Hydrate"],"disclaimer":null}"#;
        let (result, outcome) = normalise(raw);

        assert_eq!(outcome, ParseOutcome::Parsed);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::from_str::<Value>(raw).unwrap()
        );
    }

    #[test]
    fn test_null_condition_fields_survive() {
        let raw = r#"{"probable_conditions":[{"name":"Cold","likelihood":null,"description":"d"}]}"#;
        let (result, _) = normalise(raw);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"probable_conditions": [{"name": "Cold", "likelihood": null, "description": "d"}]})
        );
    }

    #[test]
    fn test_any_json_document_parses() {
        for raw in ["[1, 2, 3]", r#"{"probable_conditions": "none"}"#, "42"] {
            let (result, outcome) = normalise(raw);
            assert_eq!(outcome, ParseOutcome::Parsed, "input: {raw}");
            assert_eq!(result.as_value(), &serde_json::from_str::<Value>(raw).unwrap());
        }
    }

    #[test]
    fn test_empty_object_parses() {
        let (result, outcome) = normalise("{}");
        assert_eq!(outcome, ParseOutcome::Parsed);
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({}));
    }
}
