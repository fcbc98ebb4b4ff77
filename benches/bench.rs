// Criterion benchmarks for Festival Match

use chrono::Month;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use festival_match::core::{calculate_criterion_scores, classify_region, Matcher};
use festival_match::models::{
    AudienceSize, BudgetRange, CatalogItem, CostRange, Preference, PreferenceQuery, Region,
    RegionChoice,
};

const COUNTRIES: [&str; 6] = ["Belgium", "UK", "USA", "Japan", "Australia", "Canada"];
const GENRES: [&str; 6] = ["electronic", "rock", "indie", "pop", "techno", "folk"];

fn create_festival(id: usize) -> CatalogItem {
    let month = Month::try_from((id % 12 + 1) as u8).unwrap_or(Month::July);

    CatalogItem {
        id: id.to_string(),
        name: format!("Festival {}", id),
        country: COUNTRIES[id % COUNTRIES.len()].to_string(),
        city: "City".to_string(),
        months: vec![month, month.succ()],
        genres: vec![
            GENRES[id % GENRES.len()].to_string(),
            GENRES[(id / 2) % GENRES.len()].to_string(),
        ],
        cost: CostRange {
            min: 50.0 + (id % 40) as f64 * 10.0,
            max: 200.0 + (id % 40) as f64 * 15.0,
        },
        audience_size: match id % 3 {
            0 => AudienceSize::Intimate,
            1 => AudienceSize::Medium,
            _ => AudienceSize::Massive,
        },
        duration_days: 1 + (id % 6) as u8,
        family_friendly: id % 2 == 0,
        camping: id % 3 != 0,
        glamping: id % 5 == 0,
        vibes: vec![],
        weather: vec![],
        website: None,
        ticket_url: None,
    }
}

fn create_query() -> PreferenceQuery {
    PreferenceQuery {
        genres: vec!["electronic".to_string(), "techno".to_string()],
        months: vec![Month::July, Month::August],
        budget: BudgetRange { min: Some(100.0), max: Some(400.0) },
        audience_size: Preference::Only(AudienceSize::Massive),
        camping: Preference::Only(true),
        regions: vec![RegionChoice::Region(Region::Europe)],
        genre_importance: 4,
        ..Default::default()
    }
}

fn bench_classify_region(c: &mut Criterion) {
    c.bench_function("classify_region", |b| {
        b.iter(|| {
            for country in COUNTRIES {
                black_box(classify_region(black_box(country)));
            }
        });
    });
}

fn bench_criterion_scores(c: &mut Criterion) {
    let festival = create_festival(7);
    let query = create_query();

    c.bench_function("criterion_scores", |b| {
        b.iter(|| calculate_criterion_scores(black_box(&festival), black_box(&query)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let query = create_query();

    let mut group = c.benchmark_group("ranking");

    for catalog_size in [10, 50, 100, 500, 5000].iter() {
        let catalog: Vec<CatalogItem> = (0..*catalog_size).map(create_festival).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| matcher.rank(black_box(&catalog), black_box(&query), black_box(20)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classify_region,
    bench_criterion_scores,
    bench_ranking
);

criterion_main!(benches);
