use compute::CpuBackend;
use criterion::{criterion_group, criterion_main, Criterion};
use raymarch::{compute_depth_map_with, RenderConfig, ShapeKind};
use std::sync::Arc;

fn bench_mandelbulb(c: &mut Criterion) {
    let config = RenderConfig { resolution: 32, march_steps: 50, order: 4, ..RenderConfig::default() };
    c.bench_function("mandelbulb_32px_50_steps", |b| {
        b.iter(|| compute_depth_map_with(&config, Arc::new(CpuBackend::new()), None).unwrap());
    });
}

fn bench_sphere(c: &mut Criterion) {
    let config = RenderConfig {
        resolution: 64,
        march_steps: 50,
        shape: ShapeKind::Sphere,
        ..RenderConfig::default()
    };
    c.bench_function("sphere_64px_50_steps", |b| {
        b.iter(|| compute_depth_map_with(&config, Arc::new(CpuBackend::new()), None).unwrap());
    });
}

criterion_group!(benches, bench_mandelbulb, bench_sphere);
criterion_main!(benches);
