use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::screening::models::{CandidateProfile, Category, JobRequirement, ScoreBreakdown};

#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub id: Uuid,
    pub requirement: JobRequirement,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub filename: String,
    pub profile: CandidateProfile,
    pub created_at: DateTime<Utc>,
}

impl ResumeRecord {
    /// Filename up to its first dot, for display.
    pub fn display_name(&self) -> &str {
        match self.filename.split('.').next() {
            Some(stem) if !stem.is_empty() => stem,
            _ => &self.filename,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningRecord {
    pub job_id: Uuid,
    pub resume_id: Uuid,
    pub filename: String,
    pub display_name: String,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub department: Option<String>,
    pub category: Category,
    pub breakdown: ScoreBreakdown,
    pub screened_at: DateTime<Utc>,
}
