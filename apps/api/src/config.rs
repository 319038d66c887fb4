use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::screening::embedding::DEFAULT_DIMENSION;
use crate::screening::scorer::DEFAULT_DEPARTMENT_BOOST;

/// Which embedder backs the semantic component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingBackend {
    /// Feature-hashed bag of words and bigrams.
    Hash,
    /// No embedder; every comparison uses TF-IDF.
    None,
}

impl FromStr for EmbeddingBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" => Ok(EmbeddingBackend::Hash),
            "none" | "tfidf" => Ok(EmbeddingBackend::None),
            other => bail!("Unknown embedding backend '{other}' (expected 'hash' or 'none')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub embedding_backend: EmbeddingBackend,
    pub embedding_dim: usize,
    pub department_boost: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            embedding_backend: EmbeddingBackend::Hash,
            embedding_dim: DEFAULT_DIMENSION,
            department_boost: DEFAULT_DEPARTMENT_BOOST,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            embedding_backend: parse_env("EMBEDDING_BACKEND", defaults.embedding_backend)?,
            embedding_dim: parse_embedding_dim(optional_env("EMBEDDING_DIM").as_deref())?,
            department_boost: parse_department_boost(optional_env("DEPARTMENT_BOOST").as_deref())?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid value '{raw}' for {key}: {e}")),
        None => Ok(default),
    }
}

fn parse_embedding_dim(raw: Option<&str>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_DIMENSION);
    };
    let dim = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("EMBEDDING_DIM must be a positive integer, got '{raw}'"))?;
    if dim == 0 {
        bail!("EMBEDDING_DIM must be greater than zero");
    }
    Ok(dim)
}

fn parse_department_boost(raw: Option<&str>) -> Result<f64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_DEPARTMENT_BOOST);
    };
    let factor = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("DEPARTMENT_BOOST must be a number, got '{raw}'"))?;
    if !factor.is_finite() || factor < 1.0 {
        bail!("DEPARTMENT_BOOST must be a finite factor of at least 1.0, got {factor}");
    }
    Ok(factor)
}
