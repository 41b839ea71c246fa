use geo_tutor::{
    app,
    cli::{Cli, Commands},
    ingest::IngestPipeline,
    llm::OpenAIChatClient,
    rag::{
        chunker::TextChunker,
        embeddings::{Embedder, FastembedEmbedder},
        index::VectorIndex,
    },
    session::SessionStore,
    tutor::TutorEngine,
    AppState, Config,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::from_env()?;

    match cli.command {
        Some(Commands::Ingest) => run_ingest(&config),
        None => serve(config).await,
    }
}

/// Rebuild the vector index and exit.
fn run_ingest(config: &Config) -> anyhow::Result<()> {
    let embedder: Arc<dyn Embedder> = Arc::new(FastembedEmbedder::new()?);
    let pipeline = IngestPipeline::new(
        TextChunker::new(config.rag.chunk_size, config.rag.chunk_overlap),
        embedder,
    );
    let index = pipeline.run(
        Path::new(&config.document.pdf_path),
        Path::new(&config.document.vector_store_path),
    )?;
    info!(segments = index.len(), "Ingestion complete");
    Ok(())
}

async fn serve(config: Config) -> anyhow::Result<()> {
    // The embedding model is needed for both build and query paths;
    // failing to load it is fatal.
    let embedder: Arc<dyn Embedder> = Arc::new(FastembedEmbedder::new()?);
    let llm = Arc::new(OpenAIChatClient::new(
        config.llm.require_api_key()?.to_string(),
        config.llm.api_base.clone(),
        config.llm.model.clone(),
    ));

    // Load the persisted index, or build it synchronously when missing.
    // Either failure leaves the server up but answering 503 until a
    // restart; the cause is reported by /api/status.
    let store_path = Path::new(&config.document.vector_store_path);
    let engine = if store_path.exists() {
        match VectorIndex::load(store_path, embedder.model_id(), embedder.dimensions()) {
            Ok(index) => TutorEngine::new(
                embedder,
                llm,
                Some(Arc::new(index)),
                config.rag.retrieval_k,
            ),
            Err(e) => {
                error!("Failed to load vector index: {}", e);
                TutorEngine::failed(embedder, llm, e.to_string())
            }
        }
    } else {
        info!(
            pdf = %config.document.pdf_path,
            "Vector index not found; building from the textbook PDF"
        );
        let pipeline = IngestPipeline::new(
            TextChunker::new(config.rag.chunk_size, config.rag.chunk_overlap),
            embedder.clone(),
        );
        match pipeline.run(Path::new(&config.document.pdf_path), store_path) {
            Ok(index) => TutorEngine::new(
                embedder,
                llm,
                Some(Arc::new(index)),
                config.rag.retrieval_k,
            ),
            Err(e) => {
                error!("Failed to build vector index: {}", e);
                TutorEngine::failed(embedder, llm, e.to_string())
            }
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        engine: Arc::new(engine),
        sessions: Arc::new(SessionStore::new()),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
