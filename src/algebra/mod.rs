//! Exact decimal vectors and hyperplanes.
//!
//! All coefficients in this crate are [`Decimal`] values.  Every "is this
//! effectively zero" decision is made against an explicit tolerance, never by
//! raw equality.  Operations that can overflow the 96-bit decimal mantissa
//! return an [`AlgebraError`] rather than panicking.
//!
//! The [`DecimalContext`] type carries the precision and tolerance that the
//! linear system solver threads through its row reductions.

pub use rust_decimal::Decimal;

mod context;
mod error_types;
mod hyperplane;
mod scalarmath;
mod vector;

pub use context::*;
pub use error_types::*;
pub use hyperplane::*;
pub use scalarmath::*;
pub use vector::*;

#[cfg(test)]
mod tests;
