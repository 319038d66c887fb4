// Scoring engine: normalize → extract skills/category → weighted match score.
// Pure over text; no I/O. The HTTP glue lives in `handlers`.

pub mod dictionaries;
pub mod embedding;
pub mod engine;
pub mod experience;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod scorer;
pub mod semantic;
pub mod skills;
pub mod tfidf;
