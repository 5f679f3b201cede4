// Criterion benchmarks for the Careers Algo heuristic scorer

use careers_algo::core::calculate_match_score;
use careers_algo::models::{
    CandidateProfile, ExperienceEntry, JobDescriptor, ScoringWeights, Skill,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_profile(skill_count: usize) -> CandidateProfile {
    CandidateProfile {
        skills: (0..skill_count)
            .map(|i| Skill {
                name: format!("skill-{}", i),
            })
            .collect(),
        experience: vec![
            ExperienceEntry {
                job_title: "Senior Software Engineer".to_string(),
                description: Some(
                    "Designed and shipped distributed systems with extensive production experience"
                        .to_string(),
                ),
            },
            ExperienceEntry {
                job_title: "Software Engineer".to_string(),
                description: Some("Built internal tooling and CI pipelines".to_string()),
            },
        ],
        education: vec![],
        headline: Some("Software Engineer".to_string()),
        bio: None,
    }
}

fn create_job(skill_count: usize) -> JobDescriptor {
    let skill_text: Vec<String> = (0..skill_count).map(|i| format!("skill-{}", i)).collect();

    JobDescriptor {
        title: "Staff Software Engineer".to_string(),
        description: format!("We are hiring. Stack: {}", skill_text.join(", ")),
        requirements: "5+ years production experience with distributed systems".to_string(),
        responsibilities: "Design, build, operate".to_string(),
        location: "Remote".to_string(),
        job_type: "full-time".to_string(),
        salary_min: Some(90_000.0),
        salary_max: Some(140_000.0),
    }
}

fn bench_heuristic_score(c: &mut Criterion) {
    let weights = ScoringWeights::default();
    let mut group = c.benchmark_group("heuristic_score");

    for skill_count in [5, 20, 50, 100].iter() {
        let profile = create_profile(*skill_count);
        let job = create_job(*skill_count);

        group.bench_with_input(
            BenchmarkId::new("calculate_match_score", skill_count),
            skill_count,
            |b, _| {
                b.iter(|| {
                    calculate_match_score(black_box(&profile), black_box(&job), black_box(&weights))
                });
            },
        );
    }

    group.finish();
}

fn bench_job_text_flattening(c: &mut Criterion) {
    let job = create_job(50);

    c.bench_function("job_searchable_text", |b| {
        b.iter(|| black_box(&job).searchable_text());
    });
}

criterion_group!(benches, bench_heuristic_score, bench_job_text_flattening);
criterion_main!(benches);
