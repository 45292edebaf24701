//! Constants used throughout the symptom relay core crate.
//!
//! This module contains the fixed prompt, fallback strings and configuration defaults so
//! the relay, the server binary and the tests all agree on them.

/// Default chat-completion endpoint when no explicit URL is configured.
pub const DEFAULT_COMPLETION_API_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Default model identifier sent with every completion request.
pub const DEFAULT_COMPLETION_MODEL: &str = "google/gemini-2.5-flash";

/// Default table that analysis records are inserted into.
pub const DEFAULT_RECORD_TABLE: &str = "symptom_checks";

/// Default address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Fixed system instruction for the completion API.
pub const SYSTEM_PROMPT: &str = r#"You are a medical information assistant. Based on symptoms provided, you will:
1. Suggest 2-4 POSSIBLE medical conditions that could match these symptoms
2. Provide general health recommendations
3. ALWAYS include a clear disclaimer that this is for educational purposes only

CRITICAL: Format your response EXACTLY as valid JSON with this structure:
{
  "probable_conditions": [
    {"name": "Condition Name", "likelihood": "high/medium/low", "description": "Brief description"}
  ],
  "recommendations": "General recommendations and next steps",
  "disclaimer": "Medical disclaimer text"
}

Keep responses professional, empathetic, and educational. Never diagnose definitively."#;

/// Prefix of the user message; the raw symptom text follows it.
pub const USER_PROMPT_PREFIX: &str = "Analyze these symptoms: ";

/// Name of the single condition produced when model output cannot be parsed.
pub const FALLBACK_CONDITION_NAME: &str = "Analysis Available";

/// Recommendations used when model output cannot be parsed.
pub const FALLBACK_RECOMMENDATIONS: &str =
    "Please consult with a healthcare professional for proper evaluation.";

/// Disclaimer used when model output cannot be parsed.
pub const FALLBACK_DISCLAIMER: &str =
    "This information is for educational purposes only and not a substitute for professional medical advice.";
