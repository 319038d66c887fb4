//! Screening engine — batch orchestration over the match scorer.
//!
//! Prepares the job side once, scores candidates in parallel and layers the
//! department boost on top of each core score.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::screening::models::{CandidateProfile, JobRequirement, MatchResult};
use crate::screening::scorer::{apply_department_boost, MatchScorer, DEFAULT_DEPARTMENT_BOOST};

/// One candidate's result after orchestration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenedCandidate {
    /// Core score and breakdown, before the department boost.
    pub result: MatchResult,
    /// Score reported to callers, after the department boost.
    pub final_score: u32,
}

#[derive(Clone)]
pub struct ScreeningEngine {
    scorer: MatchScorer,
    department_boost: f64,
}

impl ScreeningEngine {
    pub fn new(scorer: MatchScorer) -> Self {
        Self {
            scorer,
            department_boost: DEFAULT_DEPARTMENT_BOOST,
        }
    }

    pub fn with_department_boost(mut self, factor: f64) -> Self {
        self.department_boost = factor;
        self
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    /// Scores a single pair and applies the department boost.
    #[allow(dead_code)] // the HTTP layer always goes through `screen`
    pub fn screen_one(&self, job: &JobRequirement, candidate: &CandidateProfile) -> ScreenedCandidate {
        self.with_boost(job, candidate, self.scorer.score(job, candidate))
    }

    /// Scores many candidates against one job. Output order matches input order.
    pub fn screen(&self, job: &JobRequirement, candidates: &[&CandidateProfile]) -> Vec<ScreenedCandidate> {
        let prepared = self.scorer.prepare_job(job);

        let screened: Vec<ScreenedCandidate> = candidates
            .par_iter()
            .map(|candidate| {
                let result = self.scorer.score_prepared(&prepared, candidate);
                self.with_boost(job, candidate, result)
            })
            .collect();

        info!(
            candidates = screened.len(),
            backend = self.scorer.semantic().backend_name(),
            "Screened candidates"
        );
        screened
    }

    fn with_boost(
        &self,
        job: &JobRequirement,
        candidate: &CandidateProfile,
        result: MatchResult,
    ) -> ScreenedCandidate {
        let final_score = apply_department_boost(
            result.score,
            job.department(),
            candidate.normalized_text(),
            self.department_boost,
        );
        ScreenedCandidate {
            result,
            final_score,
        }
    }
}
