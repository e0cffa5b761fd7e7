use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metrowave_core::{GeneratorConfig, Metadata, MetrologicalStream, MultiWaveGenerator};

fn times(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / 500.0).collect()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for &components in &[1usize, 8] {
        let freqs: Vec<f64> = (1..=components).map(|k| 50.0 * k as f64).collect();
        let ampls = vec![1.0; components];
        let phases = vec![0.0; components];

        for &noisy in &[false, true] {
            let generator = MultiWaveGenerator::new(
                GeneratorConfig::builder()
                    .waves(&freqs, &ampls, &phases)
                    .noisy(noisy)
                    .build()
                    .unwrap(),
            );
            let t = times(1024);
            let label = format!("{}c_{}", components, if noisy { "noisy" } else { "clean" });

            group.bench_with_input(BenchmarkId::from_parameter(label), &t, |b, t| {
                b.iter(|| generator.generate(black_box(t)).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let config = GeneratorConfig::builder().noise_seed(1).build().unwrap();
    let mut stream = MetrologicalStream::from_config(config, Metadata::default()).unwrap();

    c.bench_function("stream_next_sample_256", |b| {
        b.iter(|| stream.next_sample(black_box(256)).unwrap())
    });
}

criterion_group!(benches, bench_generate, bench_stream);
criterion_main!(benches);
