//! Benchmarks for the CPU-side frame: stepping the scene and rasterizing it.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fireworks::{
    BurstConfig, LauncherConfig, LauncherSpec, Pattern, PatternMode, PixelBuffer, Scene,
    SceneConfig,
};

const FRAME_MS: u64 = 16;

/// A scene stepped far enough that several bursts are in flight.
fn warmed_scene(config: SceneConfig, frames: u64) -> Scene {
    let mut scene = Scene::new(config);
    scene.arm(0);
    for frame in 1..=frames {
        scene.tick(frame * FRAME_MS);
    }
    scene
}

fn busy_config(pattern: PatternMode) -> SceneConfig {
    let launchers = (0..8)
        .map(|i| LauncherSpec::new(50.0 + i as f32 * 90.0, 400 + i * 50))
        .collect();
    SceneConfig::default()
        .with_seed(7)
        .with_launchers(launchers)
        .with_launcher(
            LauncherConfig::default().with_burst(BurstConfig::default().with_pattern(pattern)),
        )
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_tick");

    group.bench_function("default", |b| {
        let mut scene = warmed_scene(SceneConfig::default().with_seed(7), 600);
        let mut now = 600 * FRAME_MS;
        b.iter(|| {
            now += FRAME_MS;
            scene.tick(black_box(now));
        })
    });

    for (name, pattern) in [
        ("radial", PatternMode::Fixed(Pattern::Radial)),
        ("star", PatternMode::Fixed(Pattern::Star)),
    ] {
        group.bench_with_input(BenchmarkId::new("busy", name), &pattern, |b, &pattern| {
            let mut scene = warmed_scene(busy_config(pattern), 600);
            let mut now = 600 * FRAME_MS;
            b.iter(|| {
                now += FRAME_MS;
                scene.tick(black_box(now));
            })
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_render");

    for frames in [60u64, 600] {
        let scene = warmed_scene(busy_config(PatternMode::Random), frames);
        let mut buffer = PixelBuffer::new(800, 600);
        group.bench_with_input(
            BenchmarkId::new("pixel_buffer", frames),
            &scene,
            |b, scene| b.iter(|| scene.render(black_box(&mut buffer))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_render);
criterion_main!(benches);
