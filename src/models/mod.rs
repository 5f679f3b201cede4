// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, EducationEntry, ExperienceEntry, JobDescriptor, MatchScore, ScoringWeights,
    Skill,
};
pub use requests::{AverageScoreQuery, ScoreJobRequest};
pub use responses::{AverageScoreResponse, ErrorResponse, HealthResponse, ScoreJobResponse};
