//! Two-document TF-IDF cosine similarity, the lexical fallback for semantic scoring.
//!
//! Tokens are runs of two or more word characters, lowercased. IDF is smoothed,
//! `ln((1 + n) / (1 + df)) + 1`, and each document vector is l2-normalised, so
//! the result is always in [0, 1].

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

fn term_counts(text: &str) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    let lowered = text.to_lowercase();
    for m in TOKEN_RE.find_iter(&lowered) {
        *counts.entry(m.as_str().to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

/// A fitted vocabulary over a small corpus.
struct TfIdfModel {
    idf: HashMap<String, f64>,
}

impl TfIdfModel {
    fn fit(documents: &[&HashMap<String, f64>]) -> Self {
        let n = documents.len() as f64;
        let vocabulary: HashSet<&String> = documents.iter().flat_map(|d| d.keys()).collect();

        let idf = vocabulary
            .into_iter()
            .map(|term| {
                let df = documents.iter().filter(|d| d.contains_key(term)).count() as f64;
                (term.clone(), ((1.0 + n) / (1.0 + df)).ln() + 1.0)
            })
            .collect();

        Self { idf }
    }

    /// l2-normalised tf·idf weights for one document.
    fn transform(&self, counts: &HashMap<String, f64>) -> HashMap<String, f64> {
        let mut weights: HashMap<String, f64> = counts
            .iter()
            .map(|(term, tf)| (term.clone(), tf * self.idf.get(term).copied().unwrap_or(0.0)))
            .collect();

        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in weights.values_mut() {
                *w /= norm;
            }
        }
        weights
    }
}

/// Cosine similarity of `a` and `b` fitted as a two-document corpus.
///
/// Returns 0.0 when either side has no tokens.
pub fn tfidf_similarity(a: &str, b: &str) -> f64 {
    let counts_a = term_counts(a);
    let counts_b = term_counts(b);
    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    let model = TfIdfModel::fit(&[&counts_a, &counts_b]);
    let va = model.transform(&counts_a);
    let vb = model.transform(&counts_b);

    let dot: f64 = va
        .iter()
        .filter_map(|(term, wa)| vb.get(term).map(|wb| wa * wb))
        .sum();
    dot.clamp(0.0, 1.0)
}
