// Benchmark for template building and rendering
// Measures builder chains of growing length and rendering with/without locale data

use chrono::{Locale, TimeZone, Utc};
use chrono_tz::Tz;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use date_template::{
    Calendar, DateTemplate, Digits, HourCycle, MonthStyle, Piece, Renderer, WeekdayStyle,
    YearStyle,
};

fn pieces(count: usize) -> Vec<Piece> {
    let cycle = [
        Piece::Year(YearStyle::Full),
        Piece::Hours(HourCycle::TwentyFour),
        Piece::Month(MonthStyle::Short),
        Piece::Minutes(Digits::Two),
        Piece::Day(Digits::Two),
        Piece::Seconds(Digits::Two),
    ];
    cycle.iter().copied().cycle().take(count).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_template");

    for count in [3, 6, 24].iter() {
        let pieces = pieces(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &pieces, |b, pieces| {
            b.iter(|| DateTemplate::from_pieces(black_box(pieces)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_template");

    let instant = Utc.with_ymd_and_hms(2025, 6, 30, 18, 30, 15).unwrap();
    let template = DateTemplate::new()
        .weekday(WeekdayStyle::Full)
        .day(Digits::One)
        .month(MonthStyle::Full)
        .year(YearStyle::Full)
        .hours(HourCycle::Twelve)
        .minutes(Digits::Two)
        .period()
        .time_zone();

    let plain = Renderer::new(Tz::Europe__London, Locale::en_GB, false, Calendar::Gregorian);
    let localized = Renderer::new(Tz::Europe__Madrid, Locale::es_ES, true, Calendar::Gregorian);

    group.bench_function("posix", |b| {
        b.iter(|| plain.render(black_box(&instant), black_box(&template)));
    });

    group.bench_function("localized", |b| {
        b.iter(|| localized.render(black_box(&instant), black_box(&template)));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
