use serde::{Deserialize, Serialize};

/// Final match score returned to callers, always an integer in 0-100.
pub type MatchScore = u8;

/// A single named skill on a candidate profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

/// One work-history entry on a candidate profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One education entry on a candidate profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    #[serde(rename = "fieldOfStudy", default)]
    pub field_of_study: Option<String>,
}

/// Projected candidate profile: the narrow, scoring-relevant view of the
/// full profile aggregate. Built fresh for every scoring call, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl CandidateProfile {
    /// True when the profile carries at least one skill or experience entry
    pub fn has_content(&self) -> bool {
        !self.skills.is_empty() || !self.experience.is_empty()
    }
}

/// Job posting as seen by the scorer. Owned by the job-posting subsystem;
/// read-only input here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "jobType", default)]
    pub job_type: String,
    #[serde(rename = "salaryMin", default)]
    pub salary_min: Option<f64>,
    #[serde(rename = "salaryMax", default)]
    pub salary_max: Option<f64>,
}

impl JobDescriptor {
    /// Lower-cased concatenation of title, description, requirements and
    /// responsibilities, used for substring matching.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.description, self.requirements, self.responsibilities
        )
        .to_lowercase()
    }
}

/// Heuristic scoring weights. Each value caps one contribution category;
/// `base` is the flat bonus for any profile with some content.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skills: f64,
    pub title: f64,
    pub requirements: f64,
    pub education: f64,
    pub base: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            title: 30.0,
            requirements: 20.0,
            education: 10.0,
            base: 15.0,
        }
    }
}
