//! Experience compatibility between a job's required years and what a resume claims.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Matches "3 years experience", "3-5 years of experience", "5+ yrs experience".
static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\s*-\s*(\d+))?\+?\s*(?:year|yr)s?(?:\s*of)?\s*experience").unwrap()
});

pub const OVERLAP_SCORE: f64 = 1.0;
pub const OVERQUALIFIED_SCORE: f64 = 0.7;
pub const UNDERQUALIFIED_SCORE: f64 = 0.3;
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Seniority words checked, in order, when no years are stated.
const SENIORITY_SIGNALS: &[(&str, f64)] = &[
    ("senior", 0.9),
    ("junior", 0.9),
    ("entry-level", 0.9),
    ("lead", 0.85),
    ("manager", 0.8),
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unparseable experience requirement {0:?}")]
pub struct ExperienceParseError(pub String);

/// Years of experience a job asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceRequirement {
    /// No requirement. The experience component is not computed.
    Any,
    /// `max: None` is open-ended ("5+").
    Range { min: u32, max: Option<u32> },
}

impl ExperienceRequirement {
    /// Parses, treating anything malformed as `Any` so scoring stays total.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e: ExperienceParseError| {
            tracing::warn!("{e}; treating as \"Any\"");
            ExperienceRequirement::Any
        })
    }
}

impl FromStr for ExperienceRequirement {
    type Err = ExperienceParseError;

    /// Accepts "Any", "", "N-M", "N-M+", "N+" and a bare "N".
    ///
    /// A bare number carries no bound and is read as `0..` (any stated years overlap).
    /// An inverted "N-M" is kept as written and classified like any other range.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            return Ok(ExperienceRequirement::Any);
        }

        let invalid = || ExperienceParseError(raw.to_string());
        let years = |s: &str| parse_years(s).ok_or_else(invalid);

        if let Some((lo, hi)) = trimmed.split_once('-') {
            let min = years(lo)?;
            let max = match hi.trim().strip_suffix('+') {
                Some(open) => {
                    years(open)?;
                    None
                }
                None => Some(years(hi)?),
            };
            return Ok(ExperienceRequirement::Range { min, max });
        }

        if let Some(open) = trimmed.strip_suffix('+') {
            return Ok(ExperienceRequirement::Range {
                min: years(open)?,
                max: None,
            });
        }

        years(trimmed)?;
        Ok(ExperienceRequirement::Range { min: 0, max: None })
    }
}

impl fmt::Display for ExperienceRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceRequirement::Any => f.write_str("Any"),
            ExperienceRequirement::Range { min, max: Some(max) } => write!(f, "{min}-{max}"),
            ExperienceRequirement::Range { min, max: None } => write!(f, "{min}+"),
        }
    }
}

/// Digits only. Values past `u32::MAX` saturate instead of failing.
fn parse_years(raw: &str) -> Option<u32> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<u64>().map_or(u32::MAX, |v| v.min(u64::from(u32::MAX)) as u32))
}

/// Years claimed by a resume: `(min, max)`, `max == min` when no range is given.
pub fn resume_years(candidate_text: &str) -> Option<(u32, u32)> {
    let caps = YEARS_RE.captures(candidate_text)?;
    let min = parse_years(caps.get(1)?.as_str())?;
    let max = match caps.get(2) {
        Some(m) => parse_years(m.as_str())?,
        None => min,
    };
    Some((min, max))
}

/// Classifies a stated range against the job's bounds.
pub fn classify_years(job_min: u32, job_max: Option<u32>, resume_min: u32, resume_max: u32) -> f64 {
    let below_max = job_max.map_or(true, |max| max >= resume_min);
    if job_min <= resume_max && below_max {
        OVERLAP_SCORE
    } else if job_max.is_some_and(|max| resume_min > max) {
        OVERQUALIFIED_SCORE
    } else if resume_max < job_min {
        UNDERQUALIFIED_SCORE
    } else {
        NEUTRAL_SCORE
    }
}

/// Seniority keyword co-occurrence, first hit in priority order.
pub fn seniority_score(job_description: &str, candidate_text: &str) -> f64 {
    let job = job_description.to_lowercase();
    let candidate = candidate_text.to_lowercase();
    SENIORITY_SIGNALS
        .iter()
        .find(|(word, _)| job.contains(word) && candidate.contains(word))
        .map_or(NEUTRAL_SCORE, |(_, score)| *score)
}

/// Experience component of the match score.
///
/// Returns 0.0 for `Any`: the component is skipped but the weighted sum still
/// divides by its weight.
pub fn experience_score(
    requirement: ExperienceRequirement,
    job_description: &str,
    candidate_text: &str,
) -> f64 {
    let ExperienceRequirement::Range { min, max } = requirement else {
        return 0.0;
    };

    match resume_years(candidate_text) {
        Some((resume_min, resume_max)) => classify_years(min, max, resume_min, resume_max),
        None => seniority_score(job_description, candidate_text),
    }
}
