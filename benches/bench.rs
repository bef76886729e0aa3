// Criterion benchmarks for Mentor Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mentor_match::core::{calculate_match_score, total_overlap_hours, Matcher};
use mentor_match::models::{MentorProfile, PriceRange, SkillLevel, StudentProfile, TimeSlot};

const DAYS: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];
const LEVELS: [SkillLevel; 4] = [
    SkillLevel::Beginner,
    SkillLevel::Intermediate,
    SkillLevel::Advanced,
    SkillLevel::Professional,
];

fn create_mentor(id: usize) -> MentorProfile {
    MentorProfile {
        id: format!("mentor-{}", id),
        skill_level: LEVELS[id % LEVELS.len()],
        specializations: ["technique_improvement", "music_theory"]
            .iter()
            .take(1 + id % 2)
            .map(|s| s.to_string())
            .collect(),
        available_time_slots: (0..3)
            .map(|i| {
                let start = (9 + (id + i) % 10) as f64;
                TimeSlot::new(DAYS[(id + i) % DAYS.len()], start, start + 2.0)
            })
            .collect(),
        price_per_hour: 2000.0 + (id % 40) as f64 * 250.0,
        rating: 3.0 + (id % 20) as f64 * 0.1,
        total_reviews: (id % 30) as u32,
        response_rate: 0.5 + (id % 50) as f64 * 0.01,
        genres: ["jazz", "classical", "pop"]
            .iter()
            .skip(id % 3)
            .map(|s| s.to_string())
            .collect(),
    }
}

fn create_student() -> StudentProfile {
    StudentProfile {
        skill_level: SkillLevel::Intermediate,
        learning_goals: ["technique_improvement".to_string()].into_iter().collect(),
        available_time_slots: DAYS
            .iter()
            .map(|day| TimeSlot::new(*day, 17.0, 21.0))
            .collect(),
        price_range: PriceRange::new(3000.0, 8000.0),
        preferred_genres: ["jazz".to_string(), "classical".to_string()].into_iter().collect(),
        previous_mentor_ids: None,
    }
}

fn bench_overlap(c: &mut Criterion) {
    let student = create_student();
    let mentor = create_mentor(7);

    c.bench_function("total_overlap_hours", |b| {
        b.iter(|| {
            total_overlap_hours(
                black_box(&student.available_time_slots),
                black_box(&mentor.available_time_slots),
            )
        });
    });
}

fn bench_single_score(c: &mut Criterion) {
    let student = create_student();
    let mentor = create_mentor(7);

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&student), black_box(&mentor), None));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let student = create_student();
    let sequential = Matcher::new(usize::MAX);
    let parallel = Matcher::new(1);

    let mut group = c.benchmark_group("ranking");

    for mentor_count in [10, 100, 1000, 10000].iter() {
        let mentors: Vec<MentorProfile> = (0..*mentor_count).map(create_mentor).collect();

        group.bench_with_input(
            BenchmarkId::new("sequential", mentor_count),
            mentor_count,
            |b, _| b.iter(|| sequential.rank(black_box(&student), black_box(&mentors), None)),
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", mentor_count),
            mentor_count,
            |b, _| b.iter(|| parallel.rank(black_box(&student), black_box(&mentors), None)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_overlap, bench_single_score, bench_ranking);

criterion_main!(benches);
