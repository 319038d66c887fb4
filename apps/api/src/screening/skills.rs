//! Skill & Category Extractor — dictionary scans over normalized text.
//!
//! Every phrase is compiled once into a whole-word, case-insensitive pattern.
//! Internal `.`, `/` and spaces become optional separators, so `node.js`
//! matches `node.js`, `node js` and `nodejs`. Stop-words inside a phrase are
//! skipped because the normalizer has already removed them from the text.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::screening::dictionaries::{
    CATEGORY_KEYWORDS, GENERIC_ROLE_NOUNS, SKILLS, STOP_WORD_SET,
};
use crate::screening::models::Category;

/// A dictionary phrase paired with its compiled matcher.
struct PhrasePattern {
    display: String,
    regex: Regex,
}

static SKILL_PATTERNS: LazyLock<Vec<PhrasePattern>> =
    LazyLock::new(|| SKILLS.iter().filter_map(|s| compile_phrase(s)).collect());

static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Vec<PhrasePattern>)>> = LazyLock::new(|| {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| {
            let patterns = keywords.iter().filter_map(|k| compile_phrase(k)).collect();
            (*category, patterns)
        })
        .collect()
});

/// Builds the whole-word pattern for one phrase.
///
/// `(?:^|\W)` / `(?:\W|$)` are used instead of `\b` so that phrases ending in
/// a symbol (`c++`) still anchor correctly.
fn phrase_pattern(phrase: &str) -> Option<String> {
    let words: Vec<&str> = phrase
        .split_whitespace()
        .filter(|w| !STOP_WORD_SET.contains(w))
        .filter(|w| w.chars().any(|c| c.is_ascii_alphanumeric()))
        .collect();
    if words.is_empty() {
        return None;
    }

    let body = words
        .iter()
        .map(|word| {
            word.split(['.', '/'])
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"[./\s]?")
        })
        .collect::<Vec<_>>()
        .join(r"[./\s]?");

    Some(format!(r"(?i)(?:^|\W){body}(?:\W|$)"))
}

fn compile_phrase(phrase: &str) -> Option<PhrasePattern> {
    let pattern = phrase_pattern(phrase)?;
    match Regex::new(&pattern) {
        Ok(regex) => Some(PhrasePattern {
            display: phrase.replace('.', ""),
            regex,
        }),
        Err(e) => {
            tracing::error!("Dictionary phrase {phrase:?} failed to compile: {e}");
            None
        }
    }
}

/// Returns every dictionary skill found in `normalized_text`, dots stripped.
pub fn extract_skills(normalized_text: &str) -> BTreeSet<String> {
    if normalized_text.trim().is_empty() {
        return BTreeSet::new();
    }

    SKILL_PATTERNS
        .iter()
        .filter(|p| p.regex.is_match(normalized_text))
        .map(|p| p.display.clone())
        .collect()
}

/// Assigns the first category, in fixed priority order, with any keyword hit.
///
/// Falls back to `Other` when a generic role noun appears anywhere in the
/// text, otherwise `Uncategorized`.
pub fn categorize(normalized_text: &str) -> Category {
    let text = normalized_text.to_lowercase();

    let first_hit = CATEGORY_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| p.regex.is_match(&text)))
        .map(|(category, _)| *category);

    if let Some(category) = first_hit {
        return category;
    }

    if GENERIC_ROLE_NOUNS.iter().any(|noun| text.contains(noun)) {
        Category::Other
    } else {
        Category::Uncategorized
    }
}

/// Canonical comparison key for a skill: lowercased, dots removed.
pub fn skill_key(skill: &str) -> String {
    skill.to_lowercase().replace('.', "")
}
