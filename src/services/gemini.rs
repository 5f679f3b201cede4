use crate::core::{RemoteScoreError, RemoteScorer};
use crate::models::{CandidateProfile, JobDescriptor, MatchScore};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when scoring via the Gemini API.
///
/// Every variant is recoverable: the engine falls back to the heuristic
/// scorer instead of surfacing these to callers.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error status: {0}")]
    ApiError(reqwest::StatusCode),

    #[error("response carried no candidate text")]
    MissingText,

    #[error("candidate text is not a number: {0:?}")]
    NonNumeric(String),
}

/// Gemini API client
///
/// Sends one `generateContent` request per scoring call with a prompt built
/// from the flattened profile and job text, and reads a single integer back
/// from the first candidate completion.
pub struct GeminiClient {
    endpoint: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// The timeout is a hard budget for the whole round trip so a stalled
    /// provider cannot hang an average-score fan-out.
    pub fn new(endpoint: String, api_key: String, model: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            model,
            client,
        }
    }

    /// Score a candidate against a job with one API round trip
    pub async fn score_candidate(
        &self,
        profile: &CandidateProfile,
        job: &JobDescriptor,
    ) -> Result<MatchScore, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let prompt = build_prompt(profile, job);

        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        tracing::debug!("Requesting Gemini score for job '{}'", job.title);

        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(GeminiError::ApiError(response.status()));
        }

        let body: Value = response.json().await?;

        extract_score(&body)
    }
}

impl RemoteScorer for GeminiClient {
    async fn score_remote(
        &self,
        profile: &CandidateProfile,
        job: &JobDescriptor,
    ) -> Result<MatchScore, RemoteScoreError> {
        self.score_candidate(profile, job)
            .await
            .map_err(|e| RemoteScoreError(e.to_string()))
    }
}

/// Build the scoring prompt from flattened profile and job text
fn build_prompt(profile: &CandidateProfile, job: &JobDescriptor) -> String {
    let skills = profile
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let experience = profile
        .experience
        .iter()
        .map(|e| format!("{}: {}", e.job_title, e.description.as_deref().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("; ");

    let education = profile
        .education
        .iter()
        .map(|e| {
            format!(
                "{} in {}",
                e.degree,
                e.field_of_study.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Role: Expert HR Recruiter.\n\
         Task: Calculate a match percentage (0-100) for a candidate applying to a job.\n\
         \n\
         Job Details:\n\
         Title: {}\n\
         Description: {}\n\
         Requirements: {}\n\
         \n\
         Candidate Profile:\n\
         Headline: {}\n\
         Skills: {}\n\
         Experience: {}\n\
         Education: {}\n\
         \n\
         Output only a single number (integer 0-100) representing the match percentage. No text.",
        job.title,
        job.description,
        job.requirements,
        profile.headline.as_deref().unwrap_or(""),
        skills,
        experience,
        education
    )
}

/// Extract the integer score from a `generateContent` response body,
/// clamped to 0-100
fn extract_score(body: &Value) -> Result<MatchScore, GeminiError> {
    let text = body
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .ok_or(GeminiError::MissingText)?;

    parse_leading_int(text).map(|score| score.clamp(0, 100) as MatchScore)
}

/// Parse the leading integer from model output, tolerating trailing text
/// such as a newline or a percent sign
fn parse_leading_int(text: &str) -> Result<i64, GeminiError> {
    let trimmed = text.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();

    digits
        .parse::<i64>()
        .map(|n| sign * n)
        .map_err(|_| GeminiError::NonNumeric(trimmed.to_string()))
}
