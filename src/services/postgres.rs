use crate::core::{JobStore, JobStoreError, ProfileStore, ProfileStoreError};
use crate::models::{CandidateProfile, EducationEntry, ExperienceEntry, JobDescriptor, Skill};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// PostgreSQL client for the profile and job stores
///
/// The careers backend owns this schema (users, job seeker profiles, jobs);
/// this service only reads from it, so no migrations run here.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            acquire_timeout_secs.unwrap_or(5),
            idle_timeout_secs.unwrap_or(600),
        )
        .await
    }

    /// Check database connectivity
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        let row = sqlx::query("SELECT 1 AS alive")
            .fetch_one(&self.pool)
            .await?;
        let alive: i32 = row.get("alive");
        Ok(alive == 1)
    }

    /// Fetch the full profile aggregate for a user and narrow it to the
    /// fields the scorers consume
    async fn load_profile(&self, user_id: i64) -> Result<CandidateProfile, PostgresError> {
        let user_row = sqlx::query("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        if user_row.is_none() {
            return Err(PostgresError::NotFound(format!(
                "user {} does not exist",
                user_id
            )));
        }

        let profile_row =
            sqlx::query("SELECT id, headline, bio FROM job_seeker_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        // A user without a profile row has simply not filled anything in yet
        let profile_row = match profile_row {
            Some(row) => row,
            None => return Ok(empty_profile()),
        };

        let profile_id: i32 = profile_row.get("id");
        let headline: Option<String> = profile_row.get("headline");
        let bio: Option<String> = profile_row.get("bio");

        let skills = sqlx::query(
            "SELECT skill_name FROM job_seeker_skills WHERE profile_id = $1 ORDER BY created_at DESC",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| Skill {
            name: row.get("skill_name"),
        })
        .collect();

        let experience = sqlx::query(
            "SELECT job_title, description FROM job_seeker_experience WHERE profile_id = $1 ORDER BY start_date DESC",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| ExperienceEntry {
            job_title: row.get("job_title"),
            description: row.get("description"),
        })
        .collect();

        let education = sqlx::query(
            "SELECT degree, field_of_study FROM job_seeker_education WHERE profile_id = $1 ORDER BY start_date DESC",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| EducationEntry {
            degree: row.get("degree"),
            field_of_study: row.get("field_of_study"),
        })
        .collect();

        Ok(CandidateProfile {
            skills,
            experience,
            education,
            headline,
            bio,
        })
    }

    /// Fetch up to `limit` published jobs, most recently created first
    async fn load_published_jobs(&self, limit: usize) -> Result<Vec<JobDescriptor>, PostgresError> {
        let rows = sqlx::query(
            "SELECT title, description, requirements, responsibilities, location, job_type, \
             salary_min::float8 AS salary_min, salary_max::float8 AS salary_max \
             FROM jobs WHERE status = 'published' ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let jobs = rows
            .into_iter()
            .map(|row| JobDescriptor {
                title: row.get("title"),
                description: row
                    .get::<Option<String>, _>("description")
                    .unwrap_or_default(),
                requirements: row
                    .get::<Option<String>, _>("requirements")
                    .unwrap_or_default(),
                responsibilities: row
                    .get::<Option<String>, _>("responsibilities")
                    .unwrap_or_default(),
                location: row.get::<Option<String>, _>("location").unwrap_or_default(),
                job_type: row.get::<Option<String>, _>("job_type").unwrap_or_default(),
                salary_min: row.get("salary_min"),
                salary_max: row.get("salary_max"),
            })
            .collect();

        Ok(jobs)
    }
}

fn empty_profile() -> CandidateProfile {
    CandidateProfile {
        skills: vec![],
        experience: vec![],
        education: vec![],
        headline: None,
        bio: None,
    }
}

impl ProfileStore for PostgresClient {
    async fn fetch_candidate_profile(
        &self,
        user_id: i64,
    ) -> Result<CandidateProfile, ProfileStoreError> {
        match self.load_profile(user_id).await {
            Ok(profile) => Ok(profile),
            Err(PostgresError::NotFound(_)) => Err(ProfileStoreError::NotFound(user_id)),
            Err(e) => Err(ProfileStoreError::Backend(e.to_string())),
        }
    }
}

impl JobStore for PostgresClient {
    async fn list_published_jobs(&self, limit: usize) -> Result<Vec<JobDescriptor>, JobStoreError> {
        self.load_published_jobs(limit)
            .await
            .map_err(|e| JobStoreError::Backend(e.to_string()))
    }
}
