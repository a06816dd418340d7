mod solver;

pub use solver::Solver;
pub use solver::SolverOptions;
