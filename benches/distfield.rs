use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration, SamplingMode,
};
use koppel::distfield::grid::generate_seeds;
use koppel::{DistanceField, GridInfo};

pub fn bench_distfield(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut group = c.benchmark_group("DistanceField");
    group
        .sampling_mode(SamplingMode::Flat)
        .plot_config(plot_config);

    // cube grids from 8³ to 64³ cells, seeds on a chessboard pattern
    for dim in [8usize, 16, 32, 64] {
        let seeds = generate_seeds([dim / 2, dim / 2, dim / 2], 2.0, [0.0; 3]);
        let info = GridInfo::new([dim, dim, dim], 1.0, [0.0; 3]);

        group.bench_with_input(
            BenchmarkId::new("::new()", dim * dim * dim),
            &seeds,
            |b, seeds| {
                b.iter(|| {
                    black_box(DistanceField::new(info, seeds.iter().copied(), &[0.7]));
                })
            },
        );
    }

    group.finish();
}

pub fn bench_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface");
    group.sampling_mode(SamplingMode::Flat);

    for dim in [16usize, 32, 64] {
        let seeds = generate_seeds([dim / 4, dim / 4, dim / 4], 4.0, [0.0; 3]);
        let info = GridInfo::new([dim, dim, dim], 1.0, [0.0; 3]);
        let field = DistanceField::new(info, seeds.iter().copied(), &[1.5]);

        group.bench_with_input(
            BenchmarkId::new("::solvent_accessible()", dim * dim * dim),
            &field,
            |b, field| {
                b.iter(|| {
                    black_box(koppel::surface::solvent_accessible(field));
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_distfield, bench_surface);
criterion_main!(benches);
