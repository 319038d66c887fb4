//! Semantic similarity — embedding cosine with a TF-IDF fallback.
//!
//! Embedding similarity is remapped from [-1, 1] to [0, 1]. The TF-IDF path is
//! already non-negative and is used as-is. Failures never reach the caller.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::screening::embedding::{cosine_similarity, EmbeddingError, TextEmbedder};
use crate::screening::models::SemanticBackend;
use crate::screening::tfidf::tfidf_similarity;

#[derive(Clone)]
pub struct SemanticScorer {
    embedder: Option<Arc<dyn TextEmbedder>>,
}

impl SemanticScorer {
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self {
            embedder: Some(embedder),
        }
    }

    /// No embedding model: every comparison goes through TF-IDF.
    pub fn lexical_only() -> Self {
        Self { embedder: None }
    }

    pub fn backend_name(&self) -> &'static str {
        self.embedder.as_ref().map_or("tfidf", |e| e.name())
    }

    /// Embeds the job side once so batch screening can reuse it.
    /// `None` means the embedding path is unavailable for this job.
    pub fn embed_job(&self, description: &str) -> Option<Vec<f32>> {
        let embedder = self.embedder.as_ref()?;
        match embedder.embed(description) {
            Ok(vector) => Some(vector),
            Err(e) => {
                warn!("Job description embedding failed, using TF-IDF: {e}");
                None
            }
        }
    }

    /// Similarity between a job description (with its cached embedding, if
    /// any) and a candidate's normalized text.
    pub fn similarity(
        &self,
        job_description: &str,
        job_embedding: Option<&[f32]>,
        candidate_text: &str,
    ) -> (f64, SemanticBackend) {
        if let (Some(embedder), Some(job_vec)) = (self.embedder.as_ref(), job_embedding) {
            match embedding_similarity(embedder.as_ref(), job_vec, candidate_text) {
                Ok(sim) => return ((sim + 1.0) / 2.0, SemanticBackend::Embedding),
                Err(e) => warn!("Candidate embedding failed, using TF-IDF: {e}"),
            }
        } else {
            debug!("No embedding available, using TF-IDF");
        }

        (
            tfidf_similarity(job_description, candidate_text),
            SemanticBackend::TfIdf,
        )
    }
}

fn embedding_similarity(
    embedder: &dyn TextEmbedder,
    job_vec: &[f32],
    candidate_text: &str,
) -> Result<f64, EmbeddingError> {
    let candidate_vec = embedder.embed(candidate_text)?;
    cosine_similarity(job_vec, &candidate_vec)
}
