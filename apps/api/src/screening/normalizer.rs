//! Text Normalizer — turns raw extracted resume/JD text into a clean, lemmatized token stream.
//!
//! Steps, in order:
//! 1. strip URLs (`http…`, `www…`)
//! 2. strip `@mentions` and `#hashtags`
//! 3. keep only ASCII letters, digits, whitespace, `.`, `+`, `-`
//! 4. lowercase and tokenize
//! 5. drop stop-words, lemmatize the rest, rejoin with single spaces
//!
//! Pure and total: empty in, empty out.

use std::sync::LazyLock;

use regex::Regex;

use crate::screening::dictionaries::{DICTIONARY_TERMS, STOP_WORD_SET};

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+|www\S+").unwrap());
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[@#]\w+").unwrap());
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s.+\-]").unwrap());

/// Irregular plurals the suffix rules would get wrong.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("children", "child"),
    ("women", "woman"),
    ("men", "man"),
    ("people", "people"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("analyses", "analysis"),
    ("diagnoses", "diagnosis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("indices", "index"),
    ("matrices", "matrix"),
    // singular nouns ending in -s
    ("news", "news"),
    ("physics", "physics"),
    ("mathematics", "mathematics"),
    ("economics", "economics"),
    ("statistics", "statistics"),
    ("electronics", "electronics"),
    ("ethics", "ethics"),
    ("series", "series"),
    ("species", "species"),
];

/// Suffixes that look plural but belong to singular nouns.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

/// Normalizes raw text. See module docs for the exact steps.
pub fn normalize(raw_text: &str) -> String {
    let mut text = raw_text.to_string();
    for re in [&*URL_RE, &*MENTION_RE, &*DISALLOWED_RE] {
        text = re.replace_all(&text, "").into_owned();
    }
    let text = text.to_lowercase();

    tokenize(&text)
        .filter(|token| !STOP_WORD_SET.contains(token))
        .map(lemmatize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits on whitespace and trims sentence punctuation. Internal dots
/// (`node.js`), ranges (`3-5`) and pluses (`c++`, `5+`) survive.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|piece| piece.trim_matches(|c| c == '.' || c == '-'))
        .filter(|token| token.chars().any(|c| c.is_ascii_alphanumeric()))
}

/// Reduces a lowercase token to its noun base form.
///
/// Dictionary terms, short tokens and anything containing digits or symbols
/// pass through unchanged.
pub fn lemmatize(token: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR_LEMMAS.iter().find(|(plural, _)| *plural == token) {
        return (*lemma).to_string();
    }

    if token.len() <= 3
        || DICTIONARY_TERMS.contains(token)
        || !token.chars().all(|c| c.is_ascii_lowercase())
        || SINGULAR_ENDINGS.iter().any(|end| token.ends_with(end))
    {
        return token.to_string();
    }

    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if token.ends_with(suffix) {
            return token[..token.len() - 2].to_string();
        }
    }
    match token.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_urls_mentions_and_hashtags_are_stripped() {
        let out = normalize(
            "See https://example.com/cv and www.portfolio.io, ping @jane about #hiring python",
        );
        assert_eq!(out, "see ping python");
    }

    #[test]
    fn test_disallowed_characters_are_removed() {
        assert_eq!(normalize("C++, Node.js & SQL!"), "c++ node.js sql");
    }

    #[test]
    fn test_stop_words_are_dropped() {
        assert_eq!(normalize("The role of a developer is to build"), "role developer build");
    }

    #[test]
    fn test_plurals_are_lemmatized() {
        assert_eq!(
            normalize("Teams: databases, companies, boxes, classes, years"),
            "team database company box class year"
        );
    }

    #[test]
    fn test_dictionary_terms_are_not_lemmatized() {
        assert_eq!(normalize("Sales operations with Kubernetes"), "sales operations kubernetes");
    }

    #[test]
    fn test_experience_phrases_survive() {
        assert_eq!(
            normalize("5+ yrs of experience, 3-5 years experience."),
            "5+ yrs experience 3-5 year experience"
        );
    }

    #[test]
    fn test_trailing_sentence_dot_is_trimmed_but_internal_dot_kept() {
        assert_eq!(normalize("Experienced in node.js."), "experienced node.js");
    }

    #[test]
    fn test_irregular_and_singular_words() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("business"), "business");
        assert_eq!(lemmatize("status"), "status");
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("aws"), "aws");
        assert_eq!(lemmatize("news"), "news");
        assert_eq!(lemmatize("physics"), "physics");
        assert_eq!(lemmatize("mathematics"), "mathematics");
    }

    #[test]
    fn test_normalize_is_idempotent_per_input() {
        let raw = "Senior Engineers building APIs at https://x.io #rust";
        assert_eq!(normalize(raw), normalize(raw));
    }
}
