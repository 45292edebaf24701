//! Plain-text rendering of analysis results and notifications.

use std::io::{self, Write};

use symptom_core::{AnalysisResult, Likelihood};

use crate::form::Notifier;

fn likelihood_label(likelihood: Option<&Likelihood>) -> String {
    match likelihood {
        Some(l) => format!("{l} likelihood"),
        None => "likelihood not given".to_string(),
    }
}

/// Write `result` as the form would display it.
pub fn render_result(out: &mut impl Write, result: &AnalysisResult) -> io::Result<()> {
    let conditions = result.conditions();
    writeln!(out, "Possible conditions")?;
    if conditions.is_empty() {
        writeln!(out, "  (none reported)")?;
    }
    for (i, condition) in conditions.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} [{}]",
            i + 1,
            condition.name.as_deref().unwrap_or("Unnamed condition"),
            likelihood_label(condition.likelihood.as_ref())
        )?;
        if let Some(description) = condition.description.as_deref() {
            for line in description.lines() {
                writeln!(out, "     {line}")?;
            }
        }
    }

    if let Some(recommendations) = result.recommendations() {
        writeln!(out)?;
        writeln!(out, "Recommendations")?;
        for line in recommendations.lines() {
            writeln!(out, "  {line}")?;
        }
    }
    if let Some(disclaimer) = result.disclaimer() {
        writeln!(out)?;
        writeln!(out, "Important: {disclaimer}")?;
    }
    Ok(())
}

/// Notifications on stdout (success) and stderr (failure).
#[derive(Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&mut self, message: &str) {
        println!("✓ {message}");
    }

    fn error(&mut self, message: &str) {
        eprintln!("✗ {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symptom_core::Condition;

    #[test]
    fn test_render_lists_conditions_in_order() {
        let result = AnalysisResult::new(
            vec![
                Condition::new("Common cold", Likelihood::High, "Viral"),
                Condition::new("Flu", Likelihood::Low, "Also viral"),
            ],
            "Rest",
            "Educational only",
        );

        let mut out = Vec::new();
        render_result(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        let cold = text.find("1. Common cold [high likelihood]").unwrap();
        let flu = text.find("2. Flu [low likelihood]").unwrap();
        assert!(cold < flu);
        assert!(text.contains("Recommendations\n  Rest"));
        assert!(text.contains("Important: Educational only"));
    }

    #[test]
    fn test_render_tolerates_loosely_typed_fields() {
        let result = AnalysisResult::from_value(serde_json::json!({
            "probable_conditions": [{"name": "Cold", "likelihood": null}],
            "recommendations": ["Rest", "Hydrate"]
        }));
        let mut out = Vec::new();
        render_result(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1. Cold [likelihood not given]"));
        assert!(text.contains("Recommendations\n  Rest\n  Hydrate"));
        assert!(!text.contains("Important:"));
    }

    #[test]
    fn test_render_fallback_keeps_raw_text_lines() {
        let result = AnalysisResult::fallback("line one\nline two");
        let mut out = Vec::new();
        render_result(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Analysis Available [unknown likelihood]"));
        assert!(text.contains("     line one\n     line two"));
    }
}
