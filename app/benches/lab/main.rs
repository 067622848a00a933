use criterion::{Criterion, criterion_group, criterion_main};
use labws::{Rgb, WorkingSpace, lab_to_rgb, lab_to_rgb_named, rgb_to_lab, xyz_from_lab};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("labws: xyz_from_lab", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(xyz_from_lab(i as f32 * 0.1, 20., -20.));
            }
        })
    });

    c.bench_function("labws: lab_to_rgb sRGB", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(lab_to_rgb(WorkingSpace::Srgb, i as f32 * 0.1, 20., -20.));
            }
        })
    });

    c.bench_function("labws: lab_to_rgb every space", |b| {
        b.iter(|| {
            for space in WorkingSpace::ALL {
                for i in 0..1000 {
                    black_box(lab_to_rgb(space, i as f32 * 0.1, -35., 10.));
                }
            }
        })
    });

    c.bench_function("labws: lab_to_rgb by name", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(lab_to_rgb_named("ECI RGB", i as f32 * 0.1, 5., 5.).unwrap());
            }
        })
    });

    c.bench_function("labws: rgb_to_lab sRGB", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let v = i as f32 / 1000.;
                black_box(rgb_to_lab(WorkingSpace::Srgb, Rgb::new(v, 1. - v, 0.5)));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
