use crate::models::{CandidateProfile, JobDescriptor, MatchScore, ScoringWeights};

/// Calculate the heuristic match score (0-100) for a candidate against a job
///
/// Scoring formula (four capped contributions plus a base bonus):
/// - skills score (cap 40): skills found in the job text
/// - title score (cap 30): past job title overlaps the posting title
/// - requirements score (cap 20): requirement keywords in experience text
/// - education score (cap 10): education present + headline in job text
/// - base bonus (flat 15): any profile with skills or experience
///
/// The sum is rounded and clamped to 100. Pure function: no I/O, no
/// randomness, case-insensitive substring matching only.
pub fn calculate_match_score(
    profile: &CandidateProfile,
    job: &JobDescriptor,
    weights: &ScoringWeights,
) -> MatchScore {
    let job_text = job.searchable_text();

    let skills_score = calculate_skills_score(profile, &job_text, weights.skills);
    let title_score = calculate_title_score(profile, &job.title, weights.title);
    let requirements_score =
        calculate_requirements_score(profile, &job.requirements, weights.requirements);
    let education_score = calculate_education_score(profile, &job_text, weights.education);

    // Flat bonus so a thin-but-present profile never scores zero
    let base_bonus = if profile.has_content() {
        weights.base
    } else {
        0.0
    };

    let total = skills_score + title_score + requirements_score + education_score + base_bonus;

    total.round().min(100.0).max(0.0) as MatchScore
}

/// Skills contribution: 5 points per matched skill plus up to 10 points for
/// the matched ratio, capped. A candidate with no skills contributes 0.
#[inline]
fn calculate_skills_score(profile: &CandidateProfile, job_text: &str, cap: f64) -> f64 {
    if profile.skills.is_empty() {
        return 0.0;
    }

    let matched = profile
        .skills
        .iter()
        .filter(|skill| job_text.contains(&skill.name.to_lowercase()))
        .count();

    let ratio = matched as f64 / profile.skills.len().max(1) as f64;

    (matched as f64 * 5.0 + ratio * 10.0).min(cap)
}

/// Title contribution: full weight if any past job title contains any token
/// (longer than 3 characters) of the posting title. First match wins.
#[inline]
fn calculate_title_score(profile: &CandidateProfile, job_title: &str, weight: f64) -> f64 {
    let title_words: Vec<String> = job_title
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.len() > 3)
        .map(|w| w.to_string())
        .collect();

    for entry in &profile.experience {
        let entry_title = entry.job_title.to_lowercase();
        if title_words.iter().any(|word| entry_title.contains(word)) {
            return weight;
        }
    }

    0.0
}

/// Requirements contribution: 2 points per requirement keyword (longer than
/// 4 characters) found in the concatenated experience descriptions, capped.
/// Repeated keywords count each occurrence.
#[inline]
fn calculate_requirements_score(profile: &CandidateProfile, requirements: &str, cap: f64) -> f64 {
    let experience_text = profile
        .experience
        .iter()
        .map(|e| e.description.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let keyword_matches = requirements
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.len() > 4)
        .filter(|w| experience_text.contains(*w))
        .count();

    (keyword_matches as f64 * 2.0).min(cap)
}

/// Education/profile contribution: half weight for having any education
/// entry, half weight when the headline appears in the job text.
#[inline]
fn calculate_education_score(profile: &CandidateProfile, job_text: &str, weight: f64) -> f64 {
    let mut score = 0.0;

    if !profile.education.is_empty() {
        score += weight / 2.0;
    }

    if let Some(headline) = &profile.headline {
        if !headline.is_empty() && job_text.contains(&headline.to_lowercase()) {
            score += weight / 2.0;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry, Skill};

    fn create_test_profile(skills: &[&str], experience: &[(&str, &str)]) -> CandidateProfile {
        CandidateProfile {
            skills: skills
                .iter()
                .map(|s| Skill {
                    name: s.to_string(),
                })
                .collect(),
            experience: experience
                .iter()
                .map(|(title, desc)| ExperienceEntry {
                    job_title: title.to_string(),
                    description: if desc.is_empty() {
                        None
                    } else {
                        Some(desc.to_string())
                    },
                })
                .collect(),
            education: vec![],
            headline: None,
            bio: None,
        }
    }

    fn create_test_job(title: &str, description: &str, requirements: &str) -> JobDescriptor {
        JobDescriptor {
            title: title.to_string(),
            description: description.to_string(),
            requirements: requirements.to_string(),
            responsibilities: String::new(),
            location: "Remote".to_string(),
            job_type: "full-time".to_string(),
            salary_min: None,
            salary_max: None,
        }
    }

    #[test]
    fn test_score_in_range() {
        let profile = create_test_profile(
            &["JavaScript", "React", "TypeScript"],
            &[("Frontend Developer", "Built React apps")],
        );
        let job = create_test_job(
            "Senior React Developer",
            "We need React and JavaScript experience",
            "3+ years JavaScript experience",
        );

        let score = calculate_match_score(&profile, &job, &ScoringWeights::default());
        assert!(score <= 100);
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let profile = create_test_profile(&[], &[]);
        let job = create_test_job("Backend Engineer", "Rust services", "5+ years experience");

        let score = calculate_match_score(&profile, &job, &ScoringWeights::default());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_base_bonus_applies_with_any_content() {
        // One skill that matches nothing in the job still earns the base bonus
        let profile = create_test_profile(&["Underwater Basket Weaving"], &[]);
        let job = create_test_job("Accountant", "Bookkeeping", "CPA required");

        let score = calculate_match_score(&profile, &job, &ScoringWeights::default());
        assert_eq!(score, 15);
    }

    #[test]
    fn test_skills_score_capped() {
        let skills: Vec<String> = (0..20).map(|i| format!("skill{}", i)).collect();
        let skill_refs: Vec<&str> = skills.iter().map(|s| s.as_str()).collect();
        let profile = create_test_profile(&skill_refs, &[]);

        // Job text contains every skill, so the raw sum (20*5 + 10) far
        // exceeds the cap
        let job = create_test_job("Engineer", &skills.join(" "), "");

        let score = calculate_skills_score(&profile, &job.searchable_text(), 40.0);
        assert_eq!(score, 40.0);
    }

    #[test]
    fn test_skills_score_partial_match() {
        let profile = create_test_profile(&["JavaScript", "React"], &[]);
        let job = create_test_job("Developer", "We use React daily", "");

        // 1 matched of 2: 1*5 + 0.5*10 = 10
        let score = calculate_skills_score(&profile, &job.searchable_text(), 40.0);
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_title_match_short_circuits() {
        let profile = create_test_profile(
            &[],
            &[("Junior Accountant", ""), ("Frontend Developer", "")],
        );

        let score = calculate_title_score(&profile, "Senior Frontend Engineer", 30.0);
        assert_eq!(score, 30.0);
    }

    #[test]
    fn test_title_ignores_short_tokens() {
        // "for" and "the" are <= 3 chars and must not match
        let profile = create_test_profile(&[], &[("Product Manager for the win", "")]);

        let score = calculate_title_score(&profile, "VP of the for", 30.0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_requirements_counts_repeated_keywords() {
        let profile = create_test_profile(&[], &[("Developer", "solid experience with testing")]);

        // "experience" appears twice in the requirements and matches twice
        let score = calculate_requirements_score(
            &profile,
            "experience required, experience preferred",
            20.0,
        );
        assert_eq!(score, 4.0);
    }

    #[test]
    fn test_requirements_empty_string() {
        let profile = create_test_profile(&[], &[("Developer", "lots of experience")]);

        let score = calculate_requirements_score(&profile, "", 20.0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_education_score_components() {
        let mut profile = create_test_profile(&[], &[]);
        profile.education.push(EducationEntry {
            degree: "BSc".to_string(),
            field_of_study: Some("Computer Science".to_string()),
        });
        profile.headline = Some("React Developer".to_string());

        let job = create_test_job("React Developer wanted", "", "");

        let score = calculate_education_score(&profile, &job.searchable_text(), 10.0);
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_determinism() {
        let profile = create_test_profile(
            &["Python", "SQL"],
            &[("Data Analyst", "Wrote SQL pipelines in Python")],
        );
        let job = create_test_job(
            "Senior Data Analyst",
            "Python and SQL heavy role",
            "3+ years Python experience",
        );
        let weights = ScoringWeights::default();

        let first = calculate_match_score(&profile, &job, &weights);
        let second = calculate_match_score(&profile, &job, &weights);
        assert_eq!(first, second);
    }
}
