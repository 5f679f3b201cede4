//! Careers Algo - candidate-job match scoring service for Passionfruit Careers
//!
//! This library computes a 0-100 compatibility score between a job-seeker
//! profile and a job posting. Scoring uses the Gemini API when a key is
//! configured and falls back to a deterministic keyword heuristic on any
//! failure or when no key is present.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, ScoreEngine, ScoreError};
pub use models::{
    CandidateProfile, EducationEntry, ExperienceEntry, JobDescriptor, MatchScore, ScoringWeights,
    Skill,
};
