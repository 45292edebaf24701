//! Symptom form controller.
//!
//! Holds only in-memory state: the last submitted text, whether a submission is in
//! flight, and the last result. Every submission ends in either a complete result or an
//! error; partial data is never kept.

use symptom_core::AnalysisResult;

/// Shown when the relay fails without a usable message.
pub const GENERIC_FAILURE: &str = "Failed to analyze symptoms. Please try again.";
pub const EMPTY_INPUT: &str = "Please enter your symptoms";
pub const ANALYSIS_COMPLETE: &str = "Analysis complete";

/// Anything that can run an analysis for the form.
pub trait RelayClient {
    /// Returns the relay's user-facing error message on failure.
    fn check_symptoms(&self, symptoms: &str) -> Result<AnalysisResult, String>;
}

/// Sink for the short notifications shown after each submission.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Idle,
    Loading,
    Result(AnalysisResult),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your symptoms")]
    EmptyInput,
    #[error("An analysis is already in progress")]
    Busy,
    #[error("{0}")]
    Relay(String),
}

pub struct FormController<R, N> {
    relay: R,
    notifier: N,
    state: FormState,
    symptoms: String,
}

impl<R: RelayClient, N: Notifier> FormController<R, N> {
    pub fn new(relay: R, notifier: N) -> Self {
        Self {
            relay,
            notifier,
            state: FormState::Idle,
            symptoms: String::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FormState::Loading)
    }

    pub fn symptoms(&self) -> &str {
        &self.symptoms
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Submit `text` for analysis.
    ///
    /// Blank text is rejected before the relay is called and leaves the state untouched.
    /// Any earlier result is cleared as soon as the relay is called, so a relay failure
    /// leaves the form `Idle` with nothing displayed.
    pub fn submit(&mut self, text: &str) -> Result<AnalysisResult, FormError> {
        if self.is_loading() {
            return Err(FormError::Busy);
        }
        if text.trim().is_empty() {
            self.notifier.error(EMPTY_INPUT);
            return Err(FormError::EmptyInput);
        }

        self.symptoms = text.to_string();
        self.state = FormState::Loading;

        match self.relay.check_symptoms(text) {
            Ok(result) => {
                self.notifier.success(ANALYSIS_COMPLETE);
                self.state = FormState::Result(result.clone());
                Ok(result)
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    message
                };
                self.notifier.error(&message);
                self.state = FormState::Idle;
                Err(FormError::Relay(message))
            }
        }
    }
}
