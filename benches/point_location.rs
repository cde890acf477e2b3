use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mesh_voxel::geometry::point_in_tetrahedron;

fn bench_predicate(c: &mut Criterion) {
    let tet = [
        [0.0, 0.0, 0.0],
        [10.0, 0.0, 0.0],
        [0.0, 10.0, 0.0],
        [0.0, 0.0, 10.0],
    ];

    c.bench_function("point_in_tetrahedron/hit", |b| {
        b.iter(|| point_in_tetrahedron(black_box([2.0, 2.0, 2.0]), black_box(&tet)))
    });
    c.bench_function("point_in_tetrahedron/miss", |b| {
        b.iter(|| point_in_tetrahedron(black_box([9.0, 9.0, 9.0]), black_box(&tet)))
    });
}

criterion_group!(benches, bench_predicate);
criterion_main!(benches);
