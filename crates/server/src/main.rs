use std::sync::Arc;

use tracing::info;

use cardbox_llm::FlashcardGenerator;
use cardbox_server::router;
use cardbox_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    cardbox_core::config::load_dotenv();
    let config = cardbox_core::Config::from_env();
    config.log_summary();

    let generator = match FlashcardGenerator::from_config(&config.llm) {
        Ok(g) => {
            info!("Flashcard generator ready (provider: {})", config.llm.provider);
            Some(g)
        }
        Err(e) => {
            tracing::warn!(
                "Flashcard generator not available: {} — POST /flashcards will answer 503",
                e
            );
            None
        }
    };

    let state = Arc::new(AppState {
        generator,
        provider: config.llm.provider.clone(),
    });

    let app = router::build_router(state, config.upload.max_upload_bytes());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://localhost:{}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}
