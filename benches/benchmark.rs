// Benchmarks for recommender construction and lookups
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skillrec_core::{Catalog, Recommender, SkillRecord};

const WORDS: &[&str] = &[
    "data", "cloud", "design", "security", "analytics", "marketing", "finance", "robotics",
    "networks", "testing", "writing", "leadership", "negotiation", "statistics", "welding",
    "carpentry", "nursing", "logistics", "compilers", "databases",
];

fn word(i: usize) -> &'static str {
    WORDS[i % WORDS.len()]
}

fn generate_catalog(size: usize) -> Catalog {
    let records = (0..size)
        .map(|i| {
            SkillRecord::new(
                format!("Skill{}", i),
                format!("{} {}", word(i), word(i * 7 + 3)),
                format!("applies {} to {} problems", word(i * 3), word(i * 5 + 1)),
                "Stable",
                word(i * 11 + 2),
                "",
            )
        })
        .collect();
    Catalog::from_records(records).unwrap()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 500, 2000].iter() {
        let catalog = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::new("recommender", size), &catalog, |b, catalog| {
            b.iter(|| Recommender::new(black_box(catalog.clone())).unwrap());
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 500, 2000].iter() {
        let recommender = Recommender::new(generate_catalog(*size)).unwrap();
        group.bench_with_input(BenchmarkId::new("lookup", size), &recommender, |b, r| {
            b.iter(|| r.recommend(black_box("skill42")).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
