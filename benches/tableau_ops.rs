use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stabir::ir::{rref, synthesize, synthesize_photonic_protocol};
use stabir::{graph, GateTape, Tableau};

fn random_cycle_edges(n: usize) -> Vec<(usize, usize)> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

fn random_tableau(n: usize, steps: usize, seed: u64) -> Tableau {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut t = Tableau::construct_zero(n);
    for _ in 0..steps {
        let q1 = rng.random_range(0..n);
        match rng.random_range(0..7) {
            0 => t.h(q1),
            1 => t.s(q1),
            2 => t.x(q1),
            3 => t.y(q1),
            4 => t.z(q1),
            5 => {
                let q2 = (q1 + 1) % n;
                t.cnot(q1, q2);
            }
            _ => {
                let q2 = (q1 + 1) % n;
                t.cz(q1, q2);
            }
        }
    }
    t
}

fn gate_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_application");
    for n in [8usize, 32, 64] {
        group.bench_function(BenchmarkId::new("h_s_cnot_sweep", n), |b| {
            b.iter(|| {
                let mut t = Tableau::construct_zero(n);
                for q in 0..n {
                    t.h(black_box(q));
                    t.s(black_box(q));
                    t.cnot(black_box(q), black_box((q + 1) % n));
                }
                t
            })
        });
    }
}

fn rref_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("rref");
    for n in [8usize, 32, 64] {
        let t = random_tableau(n, n * 4, 42);
        group.bench_function(BenchmarkId::new("rref", n), |b| {
            b.iter(|| {
                let mut working = t.clone();
                rref(black_box(&mut working));
                working
            })
        });
    }
}

fn circuit_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");
    for n in [8usize, 32, 64] {
        let t = random_tableau(n, n * 4, 7);
        group.bench_function(BenchmarkId::new("synthesize", n), |b| {
            b.iter(|| {
                let mut tape = GateTape::new();
                synthesize(black_box(&t), &mut tape).unwrap();
                tape
            })
        });
    }
}

fn photonic_protocol(c: &mut Criterion) {
    let mut group = c.benchmark_group("photonic_protocol");
    for n in [6usize, 12, 24] {
        let t = graph::from_edge_list(&random_cycle_edges(n));
        group.bench_function(BenchmarkId::new("synthesize_photonic_protocol", n), |b| {
            b.iter(|| {
                let mut tape = GateTape::new();
                synthesize_photonic_protocol(black_box(&t), &mut tape).unwrap();
                tape
            })
        });
    }
}

criterion_group!(
    benches,
    gate_application,
    rref_reduction,
    circuit_synthesis,
    photonic_protocol
);
criterion_main!(benches);
