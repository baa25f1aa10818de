use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use vortex_panel::geometry::make_circle;
use vortex_panel::panel::PanelOrder;
use vortex_panel::solver::solve_gamma;

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_gamma");
    for n in [32usize, 64, 128] {
        for (label, order) in [
            ("constant", PanelOrder::Constant),
            ("linear", PanelOrder::Linear),
        ] {
            group.bench_function(BenchmarkId::new(label, n), |b| {
                b.iter_batched(
                    || {
                        let mut circle = make_circle(n).unwrap();
                        circle.set_alpha(0.1);
                        circle.set_order(order);
                        circle
                    },
                    |mut circle| {
                        solve_gamma(&mut circle, &[]).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
