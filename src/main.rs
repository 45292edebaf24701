use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use symptom_core::{CompletionConfig, RelayConfig, RelayService, StoreConfig, DEFAULT_REST_ADDR};

/// Main entry point for the symptom relay server
///
/// Resolves configuration once, builds the relay and serves the REST API.
///
/// # Environment Variables
/// - `SYMPTOM_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `COMPLETION_API_KEY`: credential for the completion API (required)
/// - `COMPLETION_API_URL`: chat-completion endpoint (optional)
/// - `COMPLETION_MODEL`: model identifier (optional)
/// - `SUPABASE_URL`, `SUPABASE_SERVICE_ROLE_KEY`: record store; persistence is disabled when unset
/// - `SYMPTOM_TABLE`: record table (default: "symptom_checks")
///
/// # Errors
/// Returns an error if:
/// - the completion credential is missing,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("symptom_run=info".parse()?)
                .add_directive("symptom_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let completion = CompletionConfig::new(
        std::env::var("COMPLETION_API_KEY").ok(),
        std::env::var("COMPLETION_API_URL").ok(),
        std::env::var("COMPLETION_MODEL").ok(),
    )?;
    let store = StoreConfig::from_values(
        std::env::var("SUPABASE_URL").ok(),
        std::env::var("SUPABASE_SERVICE_ROLE_KEY").ok(),
        std::env::var("SYMPTOM_TABLE").ok(),
    );
    let cfg = RelayConfig::new(completion, store);
    tracing::debug!(?cfg, "Resolved configuration");

    let app = api_rest::router(RelayService::from_config(&cfg));

    let addr = std::env::var("SYMPTOM_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    tracing::info!("++ Starting symptom relay REST on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
