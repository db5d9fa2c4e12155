//! Benchmarks for dashboard formatting and panel transitions
//!
//! Run with: cargo bench

use broker_dashboard::format::{prettify_number, time_string_to_timestamp, MAX_SAFE_INTEGER};
use broker_dashboard::panel::NavigationPanel;
use broker_dashboard::schedule::TimerQueue;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_prettify(c: &mut Criterion) {
    let mut group = c.benchmark_group("prettify_number");

    for value in [999_i64, 1_234_567, MAX_SAFE_INTEGER, -42_000_000] {
        group.bench_function(format!("{}", value), |b| {
            b.iter(|| prettify_number(black_box(value)))
        });
    }

    let values: Vec<i64> = (0..1000).map(|i| i * 7_919_113).collect();
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            for v in &values {
                black_box(prettify_number(*v));
            }
        })
    });

    group.finish();
}

fn bench_time_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_string_to_timestamp");

    group.bench_function("valid", |b| {
        b.iter(|| time_string_to_timestamp(black_box("12:34:56")).unwrap())
    });

    group.bench_function("invalid", |b| {
        b.iter(|| time_string_to_timestamp(black_box("1:2:3")).unwrap_err())
    });

    group.finish();
}

fn bench_panel_cycle(c: &mut Criterion) {
    c.bench_function("panel_open_close_settle", |b| {
        b.iter(|| {
            let mut panel = NavigationPanel::new();
            let mut timers = TimerQueue::new();
            for timer in panel.open(black_box(800.0)) {
                timers.schedule(timer.delay(), timer);
            }
            for timer in panel.close() {
                timers.schedule(timer.delay(), timer);
            }
            timers.run_until_idle(|queue, timer| {
                for next in panel.fire(timer, 800.0) {
                    queue.schedule(next.delay(), next);
                }
            });
            panel.facets()
        })
    });
}

criterion_group!(benches, bench_prettify, bench_time_parse, bench_panel_cycle);
criterion_main!(benches);
