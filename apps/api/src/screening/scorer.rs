//! Match Scorer — weighted combination of semantic, skill and experience components.
//!
//! final = (semantic·0.35 + skill·0.45 + experience·0.20) / Σweights · 100,
//! clipped to [0, 100] and truncated. The department boost is a separate step
//! applied on top by the caller.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::screening::experience::experience_score;
use crate::screening::models::{
    CandidateProfile, JobRequirement, MatchResult, ScoreBreakdown,
};
use crate::screening::semantic::SemanticScorer;

pub const STRONG_SKILL_THRESHOLD: f64 = 0.7;
pub const WEAK_SKILL_THRESHOLD: f64 = 0.3;
pub const STRONG_SKILL_BOOST: f64 = 1.10;
pub const WEAK_SKILL_PENALTY: f64 = 0.80;
pub const DEFAULT_DEPARTMENT_BOOST: f64 = 1.05;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub semantic: f64,
    pub skill: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            semantic: 0.35,
            skill: 0.45,
            experience: 0.20,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.semantic + self.skill + self.experience
    }
}

/// Skill overlap between a job and a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// Required skills (job spelling) the candidate has, sorted.
    pub matched: Vec<String>,
    /// |matched| / |required|, before adjustment.
    pub raw_fraction: f64,
    /// After the strong-match boost or weak-match penalty. Not re-clamped.
    pub adjusted_fraction: f64,
}

/// Exact intersection. Both sides are already in `skill_key` form, so a
/// job's `Node.js` and an extracted `nodejs` meet as `nodejs`.
pub fn match_skills(required: &BTreeSet<String>, candidate: &BTreeSet<String>) -> SkillMatch {
    let matched: Vec<String> = required.intersection(candidate).cloned().collect();

    let raw_fraction = if required.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required.len() as f64
    };

    SkillMatch {
        matched,
        raw_fraction,
        adjusted_fraction: adjust_skill_fraction(raw_fraction),
    }
}

/// Boosts strong matches, penalises weak ones.
pub fn adjust_skill_fraction(fraction: f64) -> f64 {
    if fraction > STRONG_SKILL_THRESHOLD {
        fraction * STRONG_SKILL_BOOST
    } else if fraction < WEAK_SKILL_THRESHOLD {
        fraction * WEAK_SKILL_PENALTY
    } else {
        fraction
    }
}

/// Weighted average scaled to 0–100, clipped and truncated.
pub fn combine_scores(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> u32 {
    let total_weight = weights.total();
    if total_weight <= 0.0 {
        return 0;
    }

    let weighted = breakdown.semantic * weights.semantic
        + breakdown.skill * weights.skill
        + breakdown.experience * weights.experience;
    let scaled = weighted / total_weight * 100.0;

    if scaled.is_finite() {
        scaled.clamp(0.0, 100.0) as u32
    } else {
        0
    }
}

/// Post-hoc boost when the required department is named in the resume.
/// Truncates and re-caps at 100.
pub fn apply_department_boost(
    score: u32,
    department: Option<&str>,
    normalized_text: &str,
    factor: f64,
) -> u32 {
    let Some(department) = department.map(str::trim).filter(|d| !d.is_empty()) else {
        return score;
    };
    if !normalized_text
        .to_lowercase()
        .contains(&department.to_lowercase())
    {
        return score;
    }
    ((f64::from(score) * factor).clamp(0.0, 100.0)) as u32
}

/// Job-side state computed once and reused across candidates.
#[derive(Debug, Clone)]
pub struct PreparedJob {
    pub requirement: JobRequirement,
    pub embedding: Option<Vec<f32>>,
}

#[derive(Clone)]
pub struct MatchScorer {
    semantic: SemanticScorer,
    weights: ScoringWeights,
}

impl MatchScorer {
    pub fn new(semantic: SemanticScorer) -> Self {
        Self {
            semantic,
            weights: ScoringWeights::default(),
        }
    }

    pub fn semantic(&self) -> &SemanticScorer {
        &self.semantic
    }

    pub fn prepare_job(&self, job: &JobRequirement) -> PreparedJob {
        PreparedJob {
            requirement: job.clone(),
            embedding: self.semantic.embed_job(job.description()),
        }
    }

    /// Scores one candidate. Never fails.
    pub fn score(&self, job: &JobRequirement, candidate: &CandidateProfile) -> MatchResult {
        self.score_prepared(&self.prepare_job(job), candidate)
    }

    pub fn score_prepared(&self, job: &PreparedJob, candidate: &CandidateProfile) -> MatchResult {
        let requirement = &job.requirement;

        let (semantic, semantic_backend) = self.semantic.similarity(
            requirement.description(),
            job.embedding.as_deref(),
            candidate.normalized_text(),
        );

        let skills = match_skills(requirement.required_skills(), candidate.skills());

        let experience = experience_score(
            requirement.experience(),
            requirement.description(),
            candidate.normalized_text(),
        );

        let breakdown = ScoreBreakdown {
            semantic,
            skill: skills.adjusted_fraction,
            experience,
            semantic_backend,
        };
        let score = combine_scores(&breakdown, &self.weights);

        debug!(
            score,
            semantic,
            skill = skills.adjusted_fraction,
            skill_overlap = skills.raw_fraction,
            experience,
            backend = ?semantic_backend,
            "Scored candidate"
        );

        MatchResult {
            score,
            matched_skills: skills.matched,
            breakdown,
        }
    }
}
