use criterion::{black_box, criterion_group, criterion_main, Criterion};
use equilibrium::{solve, EquilibriumProblem, SolverConfig};
use nalgebra::{DMatrix, DVector};

fn heterodimer_problem() -> EquilibriumProblem {
    EquilibriumProblem::new(
        DMatrix::from_row_slice(2, 3, &[1, 0, 1, 0, 1, 1]),
        DVector::from_row_slice(&[0.0, 0.0, -8.0]),
        DVector::from_row_slice(&[1e-5, 1e-5]),
    )
    .unwrap()
}

fn chain_problem(n: usize) -> EquilibriumProblem {
    // numSS = n monomers; numTotal = n size-1 complexes plus (n-1) nearest-neighbor dimers,
    // so the Hessian is tridiagonal-coupled rather than diagonal.
    let num_total = n + (n - 1);
    let mut a = vec![0i64; n * num_total];
    for i in 0..n {
        a[i * num_total + i] = 1;
    }
    for i in 0..n - 1 {
        let col = n + i;
        a[i * num_total + col] = 1;
        a[(i + 1) * num_total + col] = 1;
    }
    let a = DMatrix::from_row_slice(n, num_total, &a);
    let mut g = vec![0.0; num_total];
    for v in g.iter_mut().skip(n) {
        *v = -6.0;
    }
    let g = DVector::from_vec(g);
    let x0 = DVector::from_element(n, 1e-6);
    EquilibriumProblem::new(a, g, x0).unwrap()
}

fn bench_heterodimer(c: &mut Criterion) {
    let problem = heterodimer_problem();
    let config = SolverConfig::default();
    c.bench_function("solve heterodimer", |b| {
        b.iter(|| solve(black_box(&problem), black_box(&config)).unwrap())
    });
}

fn bench_chain(c: &mut Criterion) {
    let problem = chain_problem(50);
    let config = SolverConfig::default();
    c.bench_function("solve 50-monomer nearest-neighbor chain", |b| {
        b.iter(|| solve(black_box(&problem), black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_heterodimer, bench_chain);
criterion_main!(benches);
