//! # Symptom Core
//!
//! Core logic of the symptom relay.
//!
//! This crate contains the request/response relay and nothing transport-specific:
//! - The analysis data model and its JSON shape
//! - Normalisation of raw model text (fence stripping, strict parse, fallback)
//! - The chat-completion client and the best-effort record store
//! - Configuration resolved once at startup
//!
//! **No API concerns**: HTTP routing, status codes and CORS belong in `api-rest`.

pub mod analysis;
pub mod completion;
pub mod config;
pub mod constants;
pub mod error;
pub mod normalise;
pub mod relay;
pub mod store;

pub use analysis::{AnalysisRequest, AnalysisResult, Condition, Likelihood, PersistedRecord};
pub use config::{CompletionConfig, RelayConfig, StoreConfig};
pub use constants::DEFAULT_REST_ADDR;
pub use error::{PersistenceError, PersistenceResult, RelayError, RelayResult};
pub use relay::RelayService;
pub use symptom_types::{SymptomText, TextError};
