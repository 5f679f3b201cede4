use crate::core::scoring::calculate_match_score;
use crate::models::{CandidateProfile, JobDescriptor, MatchScore, ScoringWeights};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;

/// Errors a scoring operation can surface to its caller.
///
/// By policy this is the only error that escapes the engine: a missing
/// profile is a caller/setup problem, not a transient scoring issue. Every
/// other failure in the scoring path is absorbed and yields a score of 0 so
/// a broken provider or database hiccup never breaks a caller's dashboard.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("profile not found for user {0}")]
    ProfileNotFound(i64),
}

/// Errors from the backing profile store
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("profile not found for user {0}")]
    NotFound(i64),

    #[error("profile store failure: {0}")]
    Backend(String),
}

/// Errors from the backing job store
#[derive(Debug, Error)]
pub enum JobStoreError {
    #[error("job store failure: {0}")]
    Backend(String),
}

/// Read-only access to the candidate profile aggregate
pub trait ProfileStore: Send + Sync {
    /// Fetch and project the profile for `user_id` down to the fields the
    /// scorers consume
    fn fetch_candidate_profile(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<CandidateProfile, ProfileStoreError>> + Send;
}

/// Read-only access to published job postings
pub trait JobStore: Send + Sync {
    /// Up to `limit` published jobs, most recently created first
    fn list_published_jobs(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<JobDescriptor>, JobStoreError>> + Send;
}

/// Optional remote scoring backend (the Gemini adapter in production).
/// Any error is recoverable and triggers heuristic fallback.
pub trait RemoteScorer: Send + Sync {
    fn score_remote(
        &self,
        profile: &CandidateProfile,
        job: &JobDescriptor,
    ) -> impl Future<Output = Result<MatchScore, RemoteScoreError>> + Send;
}

/// Failure of a remote scoring call, always absorbed by fallback
#[derive(Debug, Error)]
#[error("remote scorer failed: {0}")]
pub struct RemoteScoreError(pub String);

/// Match scoring orchestrator
///
/// Constructed once at startup and shared across handlers. Decides per
/// invocation whether to use the remote scorer or the local heuristic,
/// enforcing fallback on any remote failure.
pub struct ScoreEngine<P, J, R> {
    profiles: Arc<P>,
    jobs: Arc<J>,
    remote: Option<Arc<R>>,
    weights: ScoringWeights,
    average_job_limit: usize,
}

impl<P, J, R> Clone for ScoreEngine<P, J, R> {
    fn clone(&self) -> Self {
        Self {
            profiles: Arc::clone(&self.profiles),
            jobs: Arc::clone(&self.jobs),
            remote: self.remote.clone(),
            weights: self.weights,
            average_job_limit: self.average_job_limit,
        }
    }
}

impl<P, J, R> ScoreEngine<P, J, R>
where
    P: ProfileStore + 'static,
    J: JobStore + 'static,
    R: RemoteScorer + 'static,
{
    pub fn new(
        profiles: Arc<P>,
        jobs: Arc<J>,
        remote: Option<Arc<R>>,
        weights: ScoringWeights,
        average_job_limit: usize,
    ) -> Self {
        Self {
            profiles,
            jobs,
            remote,
            weights,
            average_job_limit,
        }
    }

    /// Score a single candidate/job pair
    ///
    /// Only `ScoreError::ProfileNotFound` propagates; any other failure is
    /// logged and absorbed to a score of 0.
    pub async fn score_single(
        &self,
        user_id: i64,
        job: &JobDescriptor,
    ) -> Result<MatchScore, ScoreError> {
        let profile = match self.profiles.fetch_candidate_profile(user_id).await {
            Ok(profile) => profile,
            Err(ProfileStoreError::NotFound(id)) => {
                return Err(ScoreError::ProfileNotFound(id));
            }
            Err(e) => {
                tracing::error!("Failed to fetch profile for user {}: {}", user_id, e);
                return Ok(0);
            }
        };

        if let Some(remote) = &self.remote {
            match remote.score_remote(&profile, job).await {
                Ok(score) => return Ok(score),
                Err(e) => {
                    tracing::warn!(
                        "Remote scoring failed for user {} on job '{}', falling back to heuristic: {}",
                        user_id,
                        job.title,
                        e
                    );
                }
            }
        }

        Ok(calculate_match_score(&profile, job, &self.weights))
    }

    /// Score the candidate against recent published jobs and average
    ///
    /// Fetches up to `limit` jobs (configured default when `None`), scores
    /// them all concurrently, and returns the rounded mean. An empty job set
    /// yields 0.
    pub async fn score_average(
        &self,
        user_id: i64,
        limit: Option<usize>,
    ) -> Result<MatchScore, ScoreError> {
        let limit = limit.unwrap_or(self.average_job_limit);

        let jobs = match self.jobs.list_published_jobs(limit).await {
            Ok(jobs) => jobs,
            Err(e) => {
                tracing::error!("Failed to list published jobs: {}", e);
                return Ok(0);
            }
        };

        if jobs.is_empty() {
            return Ok(0);
        }

        let job_count = jobs.len();

        // Fan out all per-job scoring calls at once; the mean is commutative
        // so completion order is irrelevant
        let mut tasks = JoinSet::new();
        for job in jobs {
            let engine = self.clone();
            tasks.spawn(async move { engine.score_single(user_id, &job).await });
        }

        let mut total: u32 = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(score)) => total += score as u32,
                Ok(Err(e)) => return Err(e),
                Err(e) => {
                    tracing::error!("Scoring task panicked: {}", e);
                    return Ok(0);
                }
            }
        }

        let mean = total as f64 / job_count as f64;
        Ok(mean.round() as MatchScore)
    }
}
