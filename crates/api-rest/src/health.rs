use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Health check used by monitoring and load balancers.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static health check; the relay holds no state that could make it unhealthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Symptom relay is alive".into(),
        }
    }
}
