use symptom_types::TextError;

/// Failures of a single symptom analysis request.
///
/// Every variant maps to exactly one HTTP status in `api-rest`. Parse failures of the
/// model output are not represented here: they are recovered with a fallback result.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Symptoms cannot be empty")]
    InvalidInput,
    #[error("Invalid request body: {0}")]
    MalformedRequest(String),
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("Service temporarily unavailable. Please contact support.")]
    ServiceUnavailable,
    #[error("AI gateway error")]
    UpstreamError { status: Option<u16>, body: String },
    #[error("No content received from AI")]
    EmptyUpstreamResponse,
    #[error("{0}")]
    Misconfiguration(String),
}

impl From<TextError> for RelayError {
    fn from(err: TextError) -> Self {
        match err {
            TextError::Empty => RelayError::InvalidInput,
        }
    }
}

pub type RelayResult<T> = std::result::Result<T, RelayError>;

/// Failures writing a [`crate::PersistedRecord`].
///
/// These never reach a caller of the relay; they are logged and dropped.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to reach persistence store: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("persistence store rejected insert (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;
