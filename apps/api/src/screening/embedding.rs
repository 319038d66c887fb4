//! Sentence-embedding backends.
//!
//! `TextEmbedder` is the narrow seam the semantic scorer talks to. `HashEmbedder`
//! is the built-in backend: FNV-1a feature hashing over word unigrams and bigrams
//! with sign hashing, l2-normalised. Deterministic, no model files.

use thiserror::Error;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const SIGN_SALT: &[u8] = b"#sign";

/// Bigrams count half as much as single words.
const BIGRAM_WEIGHT: f32 = 0.5;

pub const DEFAULT_DIMENSION: usize = 384;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("input has no embeddable tokens")]
    EmptyInput,

    #[error("embedding backend unavailable: {0}")]
    Unavailable(String),

    #[error("embedding dimension mismatch ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },
}

/// Anything that can turn text into a dense vector.
pub trait TextEmbedder: Send + Sync {
    fn name(&self) -> &'static str;

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

pub struct HashEmbedder {
    dim: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    fn add_feature(&self, vector: &mut [f32], feature: &str, weight: f32) {
        let idx = (fnv1a(feature.as_bytes(), &[]) % self.dim as u64) as usize;
        let sign = if fnv1a(feature.as_bytes(), SIGN_SALT) % 2 == 0 {
            1.0
        } else {
            -1.0
        };
        vector[idx] += sign * weight;
    }
}

impl TextEmbedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let tokens = words(text);
        if tokens.is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        let mut vector = vec![0.0f32; self.dim];
        for token in &tokens {
            self.add_feature(&mut vector, token, 1.0);
        }
        for pair in tokens.windows(2) {
            self.add_feature(&mut vector, &format!("{} {}", pair[0], pair[1]), BIGRAM_WEIGHT);
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        Ok(vector)
    }
}

/// Lowercased word tokens; `+` and `#` stay attached (`c++`, `c#`).
fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

fn fnv1a(bytes: &[u8], salt: &[u8]) -> u64 {
    bytes.iter().chain(salt).fold(FNV_OFFSET, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME)
    })
}

/// Raw cosine similarity in [-1, 1]. Zero-norm vectors are an error so the
/// caller can fall back.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(EmbeddingError::EmptyInput);
    }
    Ok(f64::from(dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}
