//! Analysis data model.
//!
//! The model output is trusted only as far as being valid JSON. [`AnalysisResult`] holds
//! that JSON value untouched so it serialises back byte-for-byte equivalent; the typed
//! [`Condition`] view and the text accessors are read leniently on top of it for display.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};
use symptom_types::SymptomText;

use crate::constants::{FALLBACK_CONDITION_NAME, FALLBACK_DISCLAIMER, FALLBACK_RECOMMENDATIONS};

/// Inbound body of `POST /check-symptoms`.
///
/// A missing or `null` `symptoms` is treated the same as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub symptoms: Option<String>,
}

impl AnalysisRequest {
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: Some(symptoms.into()),
        }
    }

    /// Validate the request, yielding the symptom text to forward upstream.
    pub fn validate(self) -> Result<SymptomText, symptom_types::TextError> {
        SymptomText::new(self.symptoms.unwrap_or_default())
    }
}

/// How likely a condition is, as reported by the model.
///
/// The prompt asks for `high`, `medium` or `low`; `unknown` is produced by the fallback
/// path. Any other value the model invents is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Likelihood {
    High,
    Medium,
    Low,
    Unknown,
    Other(String),
}

impl Likelihood {
    pub fn as_str(&self) -> &str {
        match self {
            Likelihood::High => "high",
            Likelihood::Medium => "medium",
            Likelihood::Low => "low",
            Likelihood::Unknown => "unknown",
            Likelihood::Other(value) => value,
        }
    }
}

impl From<&str> for Likelihood {
    fn from(value: &str) -> Self {
        match value {
            "high" => Likelihood::High,
            "medium" => Likelihood::Medium,
            "low" => Likelihood::Low,
            "unknown" => Likelihood::Unknown,
            other => Likelihood::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Likelihood {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Text for display from any JSON value. `null` reads as absent, arrays one item per line.
fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let lines: Vec<String> = items.iter().filter_map(display_text).collect();
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
        other => Some(other.to_string()),
    }
}

/// A candidate condition, as read from the model's JSON for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<Likelihood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Condition {
    pub fn new(
        name: impl Into<String>,
        likelihood: Likelihood,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            likelihood: Some(likelihood),
            description: Some(description.into()),
        }
    }

    /// Read one entry of `probable_conditions`. A bare value is taken as the name.
    fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self {
                name: display_text(value),
                likelihood: None,
                description: None,
            };
        };
        let text = |key: &str| fields.get(key).and_then(display_text);
        Self {
            name: text("name"),
            likelihood: text("likelihood").map(|l| Likelihood::from(l.as_str())),
            description: text("description"),
        }
    }
}

/// Answer returned to the caller: the model's JSON exactly as parsed, or the fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Result built from typed parts, as the fallback path and the terminal client do.
    pub fn new(conditions: Vec<Condition>, recommendations: &str, disclaimer: &str) -> Self {
        Self(json!({
            "probable_conditions": conditions,
            "recommendations": recommendations,
            "disclaimer": disclaimer,
        }))
    }

    /// Result used when the model text is not valid JSON.
    ///
    /// The raw text is kept whole in the single condition's description.
    pub fn fallback(raw: &str) -> Self {
        Self::new(
            vec![Condition::new(FALLBACK_CONDITION_NAME, Likelihood::Unknown, raw)],
            FALLBACK_RECOMMENDATIONS,
            FALLBACK_DISCLAIMER,
        )
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Top-level field as the model wrote it, if present.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Conditions in model order. Empty when `probable_conditions` is absent or not a list.
    pub fn conditions(&self) -> Vec<Condition> {
        match self.field("probable_conditions") {
            Some(Value::Array(items)) => items.iter().map(Condition::from_value).collect(),
            _ => Vec::new(),
        }
    }

    pub fn recommendations(&self) -> Option<String> {
        self.field("recommendations").and_then(display_text)
    }

    pub fn disclaimer(&self) -> Option<String> {
        self.field("disclaimer").and_then(display_text)
    }
}

/// Row written to the record store after every successful model response.
///
/// `probable_conditions` and `recommendations` are copied from the result as raw JSON and
/// left out of the row when the model did not send them.
#[derive(Debug, Clone, Serialize)]
pub struct PersistedRecord {
    pub id: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub symptoms: SymptomText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probable_conditions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Value>,
}

impl PersistedRecord {
    pub fn new(symptoms: &SymptomText, result: &AnalysisResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            symptoms: symptoms.clone(),
            probable_conditions: result.field("probable_conditions").cloned(),
            recommendations: result.field("recommendations").cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_keeps_unknown_fields_and_values() {
        let value = json!({
            "probable_conditions": [
                {"name": "Migraine", "likelihood": "moderate", "description": "d", "icd10": "G43"}
            ],
            "recommendations": "Rest",
            "disclaimer": "Educational only",
            "urgency": "routine"
        });

        let parsed: AnalysisResult = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(
            parsed.conditions()[0].likelihood,
            Some(Likelihood::Other("moderate".into()))
        );
        assert_eq!(serde_json::to_value(&parsed).unwrap(), value);
    }

    #[test]
    fn test_missing_fields_are_not_invented() {
        let value = json!({"recommendations": "Rest"});
        let parsed: AnalysisResult = serde_json::from_value(value.clone()).unwrap();
        assert!(parsed.conditions().is_empty());
        assert_eq!(parsed.disclaimer(), None);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), value);
    }

    #[test]
    fn test_unexpected_types_are_kept_and_read_leniently() {
        let value = json!({
            "probable_conditions": [
                {"name": 5, "likelihood": 0.7, "description": null},
                "Dehydration"
            ],
            "recommendations": ["Rest", "Hydrate"],
            "disclaimer": null
        });
        let result = AnalysisResult::from_value(value.clone());
        assert_eq!(serde_json::to_value(&result).unwrap(), value);

        let conditions = result.conditions();
        assert_eq!(conditions[0].name.as_deref(), Some("5"));
        assert_eq!(conditions[0].likelihood, Some(Likelihood::Other("0.7".into())));
        assert_eq!(conditions[0].description, None);
        assert_eq!(conditions[1].name.as_deref(), Some("Dehydration"));
        assert_eq!(result.recommendations().as_deref(), Some("Rest\nHydrate"));
        assert_eq!(result.disclaimer(), None);
    }

    #[test]
    fn test_fallback_shape() {
        let result = AnalysisResult::fallback("free text");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "probable_conditions": [
                    {"name": "Analysis Available", "likelihood": "unknown", "description": "free text"}
                ],
                "recommendations": FALLBACK_RECOMMENDATIONS,
                "disclaimer": FALLBACK_DISCLAIMER
            })
        );
    }

    #[test]
    fn test_request_validation() {
        assert!(AnalysisRequest::new(" \t").validate().is_err());
        for body in ["{}", r#"{"symptoms": null}"#] {
            let request: AnalysisRequest = serde_json::from_str(body).unwrap();
            assert!(request.validate().is_err(), "body: {body}");
        }
        assert_eq!(
            AnalysisRequest::new("cough").validate().unwrap().as_str(),
            "cough"
        );
    }

    #[test]
    fn test_record_carries_three_fields() {
        let symptoms = SymptomText::new("cough").unwrap();
        let result = AnalysisResult::fallback("raw");
        let record = PersistedRecord::new(&symptoms, &result);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["symptoms"], "cough");
        assert_eq!(value["recommendations"], FALLBACK_RECOMMENDATIONS);
        assert_eq!(value["probable_conditions"][0]["likelihood"], "unknown");
        assert!(value.get("disclaimer").is_none());
        assert!(value.get("id").is_some());
    }

    #[test]
    fn test_record_copies_raw_json_fields() {
        let symptoms = SymptomText::new("cough").unwrap();
        let result = AnalysisResult::from_value(json!({
            "probable_conditions": null,
            "recommendations": ["Rest", "Hydrate"]
        }));
        let value = serde_json::to_value(PersistedRecord::new(&symptoms, &result)).unwrap();

        assert_eq!(value["probable_conditions"], Value::Null);
        assert!(value.as_object().unwrap().contains_key("probable_conditions"));
        assert_eq!(value["recommendations"], json!(["Rest", "Hydrate"]));
    }
}
