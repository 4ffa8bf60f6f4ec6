use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_vedic::{
    GeoLocation, SAPTA_GRAHAS, ayanamsa_deg, build_natal_chart, current_period, dasha_timeline,
    derive_divisional_chart, divisional_longitude, lagna_deg, nakshatra_from_longitude,
    rashi_from_longitude, sidereal_positions,
};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;
    let jd = 2_448_027.104_166_7;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("ayanamsa_lahiri", |b| b.iter(|| ayanamsa_deg(black_box(jd))));
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("navamsa_longitude", |b| {
        b.iter(|| divisional_longitude(black_box(lon), 9))
    });
    group.finish();
}

fn sky_bench(c: &mut Criterion) {
    let jd = 2_448_027.104_166_7;
    let Ok(location) = GeoLocation::new(28.6139, 77.2090) else {
        return;
    };

    let mut group = c.benchmark_group("sky");
    group.bench_function("sidereal_positions", |b| {
        b.iter(|| sidereal_positions(black_box(jd)))
    });
    group.bench_function("lagna", |b| b.iter(|| lagna_deg(black_box(jd), &location)));
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let birth = Utc.with_ymd_and_hms(1990, 5, 15, 14, 30, 0).unwrap();
    let Ok(chart) = build_natal_chart(&birth, 28.6139, 77.2090, None) else {
        return;
    };

    let mut group = c.benchmark_group("chart");
    group.bench_function("build_natal_chart", |b| {
        b.iter(|| build_natal_chart(black_box(&birth), 28.6139, 77.2090, None))
    });
    group.bench_function("derive_d9", |b| {
        b.iter(|| derive_divisional_chart(black_box(&chart), 9))
    });
    group.bench_function("planet_lookup", |b| {
        b.iter(|| {
            SAPTA_GRAHAS
                .iter()
                .filter_map(|&g| chart.graha(black_box(g)))
                .count()
        })
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth = Utc.with_ymd_and_hms(1990, 5, 15, 14, 30, 0).unwrap();
    let query = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let Ok(chart) = build_natal_chart(&birth, 28.6139, 77.2090, None) else {
        return;
    };
    let Ok(timeline) = dasha_timeline(&chart) else {
        return;
    };

    let mut group = c.benchmark_group("dasha");
    group.bench_function("timeline", |b| b.iter(|| dasha_timeline(black_box(&chart))));
    group.bench_function("current_period", |b| {
        b.iter(|| current_period(&timeline, black_box(query)))
    });
    group.bench_function("antardashas_all", |b| {
        b.iter(|| {
            timeline
                .mahadashas()
                .iter()
                .map(|m| timeline.antardashas(m).len())
                .sum::<usize>()
        })
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, sky_bench, chart_bench, dasha_bench);
criterion_main!(benches);
