//! Core data model of the scoring engine.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::screening::experience::ExperienceRequirement;
use crate::screening::normalizer::normalize;
use crate::screening::skills::{categorize, extract_skills, skill_key};

/// Fixed category taxonomy a resume is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tech,
    Marketing,
    Design,
    Finance,
    #[serde(rename = "HR")]
    Hr,
    Sales,
    Engineering,
    #[serde(rename = "Social Media")]
    SocialMedia,
    Operations,
    Healthcare,
    Education,
    #[serde(rename = "Customer Service")]
    CustomerService,
    Legal,
    #[serde(rename = "Project Management")]
    ProjectManagement,
    Other,
    Uncategorized,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Marketing => "Marketing",
            Category::Design => "Design",
            Category::Finance => "Finance",
            Category::Hr => "HR",
            Category::Sales => "Sales",
            Category::Engineering => "Engineering",
            Category::SocialMedia => "Social Media",
            Category::Operations => "Operations",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::CustomerService => "Customer Service",
            Category::Legal => "Legal",
            Category::ProjectManagement => "Project Management",
            Category::Other => "Other",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a job asks for. Immutable once built; skills are stored lowercased.
#[derive(Debug, Clone, Serialize)]
pub struct JobRequirement {
    description: String,
    required_skills: BTreeSet<String>,
    department: Option<String>,
    experience: ExperienceRequirement,
}

impl JobRequirement {
    /// Builds a requirement. Skills are stored in the same form extraction
    /// reports (lowercase, dots removed). Blank skills and a blank department
    /// are dropped; an unparseable experience string degrades to `Any`.
    pub fn new<I, S>(
        description: impl Into<String>,
        skills: I,
        department: Option<String>,
        experience: &str,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let required_skills = skills
            .into_iter()
            .map(|s| skill_key(s.as_ref().trim()))
            .filter(|s| !s.is_empty())
            .collect();

        let department = department
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Self {
            description: description.into(),
            required_skills,
            department,
            experience: ExperienceRequirement::parse_lenient(experience),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn required_skills(&self) -> &BTreeSet<String> {
        &self.required_skills
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn experience(&self) -> ExperienceRequirement {
        self.experience
    }
}

/// A resume after the normalize → extract → categorize pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    raw_text: String,
    normalized_text: String,
    skills: BTreeSet<String>,
    category: Category,
}

impl CandidateProfile {
    /// Runs the full text pipeline. Same input, same profile.
    pub fn from_raw_text(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalize(&raw_text);
        let skills = extract_skills(&normalized_text);
        let category = categorize(&normalized_text);

        Self {
            raw_text,
            normalized_text,
            skills,
            category,
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Which path produced the semantic similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticBackend {
    Embedding,
    TfIdf,
}

/// Per-component values that went into a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0.0 – 1.0
    pub semantic: f64,
    /// Adjusted skill fraction. May exceed 1.0 after the strong-match boost.
    pub skill: f64,
    /// 0.0 when the job has no experience requirement.
    pub experience: f64,
    pub semantic_backend: SemanticBackend,
}

/// Outcome of scoring one candidate against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_requirement_lowercases_and_dedups_skills() {
        let job = JobRequirement::new(
            "Backend role",
            ["Python", "python ", "SQL", "  "],
            None,
            "Any",
        );
        let skills: Vec<&str> = job.required_skills().iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_job_requirement_canonicalizes_dotted_skills() {
        let job = JobRequirement::new("Backend role", ["Node.js", "nodejs", "ASP.NET"], None, "Any");
        let skills: Vec<&str> = job.required_skills().iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["aspnet", "nodejs"]);
    }

    #[test]
    fn test_blank_department_is_dropped() {
        let job = JobRequirement::new("x", Vec::<String>::new(), Some("  ".to_string()), "");
        assert_eq!(job.department(), None);
    }

    #[test]
    fn test_malformed_experience_becomes_any() {
        let job = JobRequirement::new("x", ["rust"], None, "lots-of");
        assert_eq!(job.experience(), ExperienceRequirement::Any);
    }

    #[test]
    fn test_candidate_profile_is_deterministic() {
        let text = "Senior Python developer with 6 years of experience in AWS and Docker.";
        let a = CandidateProfile::from_raw_text(text);
        let b = CandidateProfile::from_raw_text(text);
        assert_eq!(a, b);
        assert_eq!(a.category(), Category::Tech);
        assert!(a.skills().contains("python"));
        assert!(a.skills().contains("aws"));
    }

    #[test]
    fn test_empty_resume_is_uncategorized() {
        let profile = CandidateProfile::from_raw_text("");
        assert_eq!(profile.normalized_text(), "");
        assert!(profile.skills().is_empty());
        assert_eq!(profile.category(), Category::Uncategorized);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::SocialMedia).unwrap();
        assert_eq!(json, r#""Social Media""#);
        assert_eq!(Category::Hr.to_string(), "HR");
    }
}
