// Core algorithm exports
pub mod engine;
pub mod scoring;

pub use engine::{
    JobStore, JobStoreError, ProfileStore, ProfileStoreError, RemoteScoreError, RemoteScorer,
    ScoreEngine, ScoreError,
};
pub use scoring::calculate_match_score;
