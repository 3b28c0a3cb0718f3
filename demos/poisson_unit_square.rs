use jacobi_poisson::domain::{reference_exact, reference_source, UnitSquare};
use jacobi_poisson::solver::{JacobiSolver, RelaxationSolver};
use jacobi_poisson::utils::l2_error;
use jacobi_poisson::{Execution, SolverOptions, REFERENCE_ITERATIONS};

fn main() {
    // 100x100 nodes on the unit square, f = sin(πx)·sin(πy), u = 0 on the boundary
    let grid = UnitSquare::reference();
    let f = grid.sample(reference_source::<f64>);
    let mut u = grid.with_dirichlet(|_, _| 0.0f64);

    let options = SolverOptions::default()
        .with_iterations(REFERENCE_ITERATIONS)
        .with_execution(Execution::Rayon { threads: 0 });
    let options = if cfg!(feature = "rayon") {
        options
    } else {
        options.with_execution(Execution::Serial)
    };

    let mut solver = JacobiSolver::for_grid(&grid, options).expect("valid grid");
    let stats = solver.solve(&f, &mut u).expect("finite inputs");

    let (lo, hi) = u.min_max().unwrap_or((0.0, 0.0));
    let exact = grid.sample(reference_exact::<f64>);
    println!("grid {}x{}, stats = {:?}", grid.nx(), grid.ny(), stats);
    println!("u range [{lo:.6e}, {hi:.6e}], centre u = {:.6e}", u[(grid.nx() / 2, grid.ny() / 2)]);
    println!("rms error vs analytic = {:.6e}", l2_error(&u, &exact).expect("same grid"));
}
