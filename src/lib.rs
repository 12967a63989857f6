//! __linsys__ solves systems of linear equations in exact decimal arithmetic
//! by Gaussian elimination.
//!
//! A system is a list of [hyperplanes](crate::algebra::Hyperplane), each the
//! equation $a \cdot x = b$ for a normal vector $a \in \mathbb{R}^n$ and a
//! constant term $b$.  Solving reduces the system to triangular form, then to
//! reduced row-echelon form, and reads off one of three outcomes:
//!
//! * a unique solution point,
//! * no solution, when some equation reduces to $0 = c$ with $c \neq 0$,
//! * infinitely many solutions, returned as a basepoint plus one direction
//!   vector per free variable.
//!
//! Coefficients are [`Decimal`](crate::algebra::Decimal) values.  Every
//! comparison against zero uses an explicit tolerance and every row
//! operation rounds to an explicit number of significant digits.
//!
//! ```
//! use linsys::algebra::*;
//! use linsys::solver::*;
//!
//! let d = |s: &str| s.parse::<Decimal>().unwrap();
//! let system = LinearSystem::new(vec![
//!     Hyperplane::from_coefficients(vec![d("1"), d("0"), d("0")], d("1")).unwrap(),
//!     Hyperplane::from_coefficients(vec![d("0"), d("1"), d("0")], d("2")).unwrap(),
//!     Hyperplane::from_coefficients(vec![d("0"), d("0"), d("1")], d("3")).unwrap(),
//! ])
//! .unwrap();
//!
//! let solution = system.solve().unwrap();
//! assert_eq!(solution.unique().unwrap().coordinates(), &[d("1"), d("2"), d("3")]);
//! ```
//!
//! The [`algebra`] module also provides the vector and line geometry the
//! solver is built on: dot and cross products, projections, angles, and
//! intersections of lines in the plane.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
pub(crate) mod timers;
