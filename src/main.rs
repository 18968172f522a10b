use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use podcastify::application::services::PodcastService;
use podcastify::infrastructure::audio::Mp3Assembler;
use podcastify::infrastructure::llm::GeminiScriptClient;
use podcastify::infrastructure::observability::{TracingConfig, init_tracing};
use podcastify::infrastructure::speech::ElevenLabsClient;
use podcastify::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    for name in settings.missing_credentials() {
        tracing::warn!(credential = name, "Credential not configured, dependent calls will fail");
    }

    tokio::fs::create_dir_all(&settings.audio.output_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create output directory {}",
                settings.audio.output_dir.display()
            )
        })?;

    let script_generator = Arc::new(GeminiScriptClient::new(&settings.script_generator)?);
    let synthesizer = Arc::new(ElevenLabsClient::new(&settings.speech)?);
    let assembler = Arc::new(Mp3Assembler::new());

    let podcast_service = Arc::new(PodcastService::new(
        script_generator,
        synthesizer,
        assembler,
        settings.audio.output_dir.clone(),
        settings.audio.synthesis_concurrency,
    ));

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server.host {}", settings.server.host))?;
    let addr = SocketAddr::new(host, settings.server.port);

    let state = AppState {
        podcast_service,
        settings: Arc::new(settings),
    };

    let router = create_router(state);

    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
