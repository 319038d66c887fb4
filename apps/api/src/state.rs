use std::sync::Arc;

use crate::config::{Config, EmbeddingBackend};
use crate::repository::ScreeningRepository;
use crate::screening::embedding::HashEmbedder;
use crate::screening::engine::ScreeningEngine;
use crate::screening::scorer::MatchScorer;
use crate::screening::semantic::SemanticScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Scoring pipeline. Read-only, shared across requests and rayon workers.
    pub engine: Arc<ScreeningEngine>,
    /// Pluggable session store. Default: InMemoryRepository.
    pub repository: Arc<dyn ScreeningRepository>,
}

impl AppState {
    pub fn new(config: &Config, repository: Arc<dyn ScreeningRepository>) -> Self {
        Self {
            engine: Arc::new(build_engine(config)),
            repository,
        }
    }
}

/// Wires the semantic backend and department boost from configuration.
pub fn build_engine(config: &Config) -> ScreeningEngine {
    let semantic = match config.embedding_backend {
        EmbeddingBackend::Hash => {
            SemanticScorer::new(Arc::new(HashEmbedder::new(config.embedding_dim)))
        }
        EmbeddingBackend::None => SemanticScorer::lexical_only(),
    };
    ScreeningEngine::new(MatchScorer::new(semantic)).with_department_boost(config.department_boost)
}
