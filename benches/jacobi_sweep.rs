use criterion::{black_box, Criterion, criterion_group, criterion_main};
use jacobi_poisson::domain::{reference_source, UnitSquare};
use jacobi_poisson::solver::{JacobiSolver, RelaxationSolver};
use jacobi_poisson::{Execution, SolverOptions};

fn bench_serial_vs_rayon(c: &mut Criterion) {
    let grid = UnitSquare::new(256, 256).unwrap();
    let f = grid.sample(reference_source::<f64>);
    let u0 = grid.zero_field::<f64>();

    let mut executions = vec![("jacobi serial 256x256 x50", Execution::Serial)];
    if cfg!(feature = "rayon") {
        executions.push(("jacobi rayon 256x256 x50", Execution::Rayon { threads: 0 }));
    }

    for (name, execution) in executions {
        let options = SolverOptions::default()
            .with_iterations(50)
            .with_execution(execution);
        let mut solver = JacobiSolver::for_grid(&grid, options).unwrap();
        c.bench_function(name, |ben| {
            ben.iter(|| {
                let mut u = u0.clone();
                let _stats = solver.solve(black_box(&f), black_box(&mut u)).unwrap();
            })
        });
    }
}

criterion_group!(benches, bench_serial_vs_rayon);
criterion_main!(benches);
