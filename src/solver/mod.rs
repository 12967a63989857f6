//! Linear system solver.
//!
//! [`LinearSystem`] holds the equations and implements the reductions
//! directly.  Its methods are pure: [`solve`](LinearSystem::solve) and the
//! `compute_*` methods work on a copy.
//!
//! [`LinearSolver`] wraps a system together with [`SolverSettings`] and
//! adds phase timing, progress printing through a configurable target and
//! JSON problem files.

mod error;
mod info;
mod info_print;
mod linsys;
mod reduction;
mod settings;
mod solution;
#[allow(clippy::module_inception)]
mod solver;

pub use error::*;
pub use info::*;
pub use linsys::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;

pub use crate::io::ConfigurablePrintTarget;

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        mod json;
        pub use json::*;
    }
}

//configure tests of internals
#[cfg(test)]
mod tests;
