use super::*;
use crate::io::PrintTarget;
use crate::timers::*;

/// Summary of the most recent solve, together with the destination for
/// the solver's printed output.
#[derive(Default, Debug)]
pub struct SolveInfo {
    pub status: SolverStatus,
    /// number of equations
    pub equations: usize,
    /// number of variables
    pub variables: usize,
    /// number of pivot rows in the reduced system
    pub rank: usize,
    /// dimension of the solution set when it is nonempty
    pub free_variables: usize,
    /// solve time in seconds
    pub solve_time: f64,

    pub(crate) stream: PrintTarget,
}

impl SolveInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self, system: &LinearSystem, timers: &mut Timers) {
        self.status = SolverStatus::Unsolved;
        self.equations = system.len();
        self.variables = system.dimension();
        self.rank = 0;
        self.free_variables = 0;
        self.solve_time = 0f64;

        timers.reset_timer("solve");
    }

    // called with the reduced row-echelon form
    pub(crate) fn update(&mut self, rref: &LinearSystem) {
        self.rank = rref.pivot_count();
        self.free_variables = self.variables - self.rank;
    }

    pub(crate) fn finalize(&mut self, solution: &Solution, timers: &Timers) {
        self.status = solution.status();
        if self.status == SolverStatus::Inconsistent {
            self.free_variables = 0;
        }
        self.solve_time = timers.total_time().as_secs_f64();
    }
}
