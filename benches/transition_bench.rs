//! Performance benchmarks for pair analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mixpoint_dsp::{analyze_track, find_best_transition, suggest_transition, AnalysisConfig, AudioBuffer};

/// Synthetic 30-second track: a tone plus a click every half second.
fn synthetic_track(freq: f32, beat_period: usize) -> AudioBuffer {
    let total = 44100 * 30;
    let mut samples: Vec<f32> = (0..total)
        .map(|i| (i as f32 * freq * 2.0 * std::f32::consts::PI / 44100.0).sin() * 0.3)
        .collect();
    let mut pos = 0;
    while pos < total {
        for sample in samples.iter_mut().skip(pos).take(64) {
            *sample = 0.9;
        }
        pos += beat_period;
    }
    AudioBuffer::new(samples, 44100, 1)
}

fn bench_analyze_track(c: &mut Criterion) {
    let track = synthetic_track(440.0, 22050);
    let config = AnalysisConfig::default();

    c.bench_function("analyze_track_30s", |b| {
        b.iter(|| {
            let _ = analyze_track(black_box(&track), black_box(&config));
        });
    });
}

fn bench_suggest_transition(c: &mut Criterion) {
    let track_a = synthetic_track(440.0, 22050);
    let track_b = synthetic_track(329.63, 21000);
    let config = AnalysisConfig::default();

    c.bench_function("suggest_transition_30s_pair", |b| {
        b.iter(|| {
            let _ = suggest_transition(
                black_box(&track_a),
                black_box(&track_b),
                black_box(&config),
            );
        });
    });
}

fn bench_scorer_only(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    let a = analyze_track(&synthetic_track(440.0, 22050), &config);
    let b = analyze_track(&synthetic_track(329.63, 21000), &config);

    c.bench_function("find_best_transition", |bench| {
        bench.iter(|| {
            let _ = find_best_transition(black_box(&a), black_box(&b));
        });
    });
}

criterion_group!(
    benches,
    bench_analyze_track,
    bench_suggest_transition,
    bench_scorer_only
);
criterion_main!(benches);
