use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vek::Rgba;

use scanline::math::{rotation_x, rotation_y, Vec3};
use scanline::{cube, CubeShader, Framebuffer, Pipeline, Rotator, Texture2d, Wrapped};

fn cube_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("textured_cube");

    for &[w, h] in &[[320usize, 240usize], [640, 480], [1280, 960]] {
        let center = Vec3::new(0.0, 0.0, 4.0);
        let mesh = cube(center, 2.0);
        let texture = Texture2d::from_fn(64, 64, |x, y| {
            if (x / 8 + y / 8) % 2 == 0 {
                Rgba::new(235, 235, 235, 255)
            } else {
                Rgba::new(40, 40, 40, 255)
            }
        });
        let sampler = Wrapped::new(texture, 1.0);
        let mut pipeline = Pipeline::new(
            Framebuffer::new(w, h),
            Rotator::new(rotation_x(0.4) * rotation_y(0.6), center),
            CubeShader,
        );

        group.bench_function(format!("{w}x{h}"), |b| {
            b.iter(|| {
                pipeline.framebuffer_mut().clear();
                pipeline.draw(&mesh, &sampler);
                black_box(pipeline.framebuffer().buffer());
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_millis(1000));
    targets = cube_benchmark
}

criterion_main!(benches);
