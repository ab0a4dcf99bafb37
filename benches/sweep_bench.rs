use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use relax2d::{Body, BodyParams, PhysicsCore, Vector2};

/// A floor with a grid of circles and boxes dropped onto it
fn scene(count: usize) -> Vec<Body> {
    let mut bodies = vec![Body::rectangle(200.0, 2.0, BodyParams::fixed()).unwrap()];
    let columns = 20;

    for i in 0..count {
        let x = (i % columns) as f64 * 1.1 - 10.0;
        let y = 2.0 + (i / columns) as f64 * 1.1;
        let params = BodyParams::dynamic(1.0).with_position(Vector2::new(x, y));
        let body = if i % 2 == 0 {
            Body::circle(0.5, params)
        } else {
            Body::rectangle(1.0, 1.0, params)
        };
        bodies.push(body.unwrap());
    }

    bodies
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut bodies = scene(count);
            let mut core = PhysicsCore::new();
            b.iter(|| {
                core.tick(black_box(&mut bodies), 1.0 / 60.0);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
