//! Validated text types shared by the relay service and the terminal form.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Symptoms cannot be empty")]
    Empty,
}

/// Free-text symptom description that is guaranteed to contain at least one
/// non-whitespace character.
///
/// Unlike a trimmed string type, the text is kept exactly as the user typed it: it is
/// forwarded to the completion API and stored as-is. Only the emptiness check looks at
/// the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomText(String);

impl SymptomText {
    /// Creates a new `SymptomText` from the given input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(SymptomText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(input))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymptomText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for SymptomText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
