use super::*;
use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use crate::timers::*;
use std::io::Write;

/// Front end that solves a [`LinearSystem`] with configurable precision,
/// timing and progress output.
///
/// ```no_run
/// use linsys::algebra::*;
/// use linsys::solver::*;
///
/// let (one, minus_one) = (Decimal::ONE, Decimal::NEGATIVE_ONE);
/// let planes = vec![
///     Hyperplane::from_coefficients(vec![one, one], Decimal::TWO).unwrap(),
///     Hyperplane::from_coefficients(vec![one, minus_one], Decimal::ZERO).unwrap(),
/// ];
/// let mut solver = LinearSolver::new(planes, SolverSettings::default()).unwrap();
/// let solution = solver.solve().unwrap();
/// assert_eq!(solution.status(), SolverStatus::Solved);
/// ```
#[derive(Debug)]
pub struct LinearSolver {
    pub system: LinearSystem,
    pub settings: SolverSettings,
    pub info: SolveInfo,
    /// Outcome of the last successful call to [`solve`](LinearSolver::solve)
    pub solution: Option<Solution>,
    timers: Option<Timers>,
}

impl LinearSolver {
    pub fn new(planes: Vec<Hyperplane>, settings: SolverSettings) -> Result<Self, SolverError> {
        settings.validate()?;

        let mut timers = Timers::default();
        let mut output;

        timeit! {timers => "setup"; {
            let system = LinearSystem::with_context(planes, settings.context())?;
            let info = SolveInfo::new();

            output = Self {
                system,
                settings,
                info,
                solution: None,
                timers: None,
            };
        }}

        output.timers.replace(timers);
        Ok(output)
    }

    /// Reduces the system and classifies its solution set.
    ///
    /// The stored system is left untouched, so `solve` can be called
    /// repeatedly, for instance after changing `settings.verbose`.
    pub fn solve(&mut self) -> Result<&Solution, SolverError> {
        self.settings.validate()?;
        self.solution = None;

        // timers live in an Option so that they can be moved out
        // here without borrowing the rest of the solver
        let mut timers = self.timers.take().unwrap_or_default();
        let result = self.run_pipeline(&mut timers);
        self.timers.replace(timers);

        Ok(self.solution.insert(result?))
    }

    fn run_pipeline(&mut self, timers: &mut Timers) -> Result<Solution, SolverError> {
        notimeit! {timers; {
            self.info.print_configuration(&self.settings, &self.system)?;
        }}

        self.info.reset(&self.system, timers);

        let mut system = self.system.clone();
        let solution;

        timeit! {timers => "solve"; {

            timeit!{timers => "triangular form"; {
                system.triangularize()?;
            }}

            notimeit!{timers; {
                self.info.print_reduction(&self.settings, "Triangular form", &system)?;
            }}

            timeit!{timers => "rref"; {
                system.back_substitute()?;
            }}

            notimeit!{timers; {
                let title = "Reduced row-echelon form";
                self.info.print_reduction(&self.settings, title, &system)?;
            }}

            self.info.update(&system);

            timeit!{timers => "extraction"; {
                solution = system.extract_solution()?;
            }}

        }} // end "solve" timer

        self.info.finalize(&solution, timers);
        self.info.print_footer(&self.settings, &solution, timers)?;

        Ok(solution)
    }
}

impl ConfigurablePrintTarget for LinearSolver {
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}
