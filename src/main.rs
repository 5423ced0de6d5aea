use std::sync::Arc;

use care_assist::catalog::Catalog;
use care_assist::chat::cli;
use care_assist::config::AdvisorConfig;
use care_assist::llm::{LlmBackend, LlmConfig, create_provider};
use care_assist::recommend::{AdviceGenerator, Resolver};
use care_assist::routes::{ApiState, api_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Read API key from environment
    let api_key = std::env::var("GROQ_API_KEY").unwrap_or_else(|_| {
        eprintln!("Error: GROQ_API_KEY not set");
        eprintln!("  export GROQ_API_KEY=gsk_...");
        std::process::exit(1);
    });

    let model = std::env::var("CARE_ASSIST_MODEL")
        .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string());

    let api_port: u16 = std::env::var("CARE_ASSIST_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let config = AdvisorConfig {
        api_port,
        ..AdvisorConfig::default()
    };

    eprintln!("🦷 Care Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", model);
    eprintln!("   API: http://0.0.0.0:{}/api/recommendation", api_port);
    eprintln!("   Chat API: http://0.0.0.0:{}/api/chat", api_port);
    eprintln!("   Admin API: http://0.0.0.0:{}/api/admin/summary", api_port);
    eprintln!("   Answer by number. /restart to start over, /quit to exit.\n");

    // Create LLM provider
    let llm_config = LlmConfig {
        backend: LlmBackend::Groq,
        api_key: secrecy::SecretString::from(api_key),
        model,
        endpoint: None,
    };
    let llm = create_provider(&llm_config)?;
    let advice = Arc::new(AdviceGenerator::new(llm, &config));

    // Catalog and resolver; validation failures are fatal at startup
    let catalog = Arc::new(Catalog::verident());
    let resolver = Arc::new(Resolver::new(Arc::clone(&catalog))?);

    // Spawn the REST API server
    let state = ApiState {
        catalog: Arc::clone(&catalog),
        resolver,
        advice: Arc::clone(&advice),
    };
    let app = api_routes(state);
    tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", api_port))
            .await
            .expect("Failed to bind API port");
        tracing::info!(port = api_port, "API server started");
        axum::serve(listener, app).await.ok();
    });

    // Run the CLI conversation in the foreground
    cli::run(catalog, advice).await?;

    Ok(())
}
