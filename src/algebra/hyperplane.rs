use super::{AlgebraError, Decimal, DecimalMath, Vector};
use itertools::Itertools;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of decimal places shown when rendering equations.
const DISPLAY_DECIMAL_PLACES: u32 = 3;

/// The equation `normal_vector · x = constant_term` in N-dimensional space.
///
/// Lines are hyperplanes of dimension 2 and planes are hyperplanes of
/// dimension 3.  A hyperplane is immutable: scaling and combination produce
/// new hyperplanes.
///
/// `PartialEq` compares coefficients exactly.  Use
/// [`approx_eq`](Hyperplane::approx_eq) for a coefficient comparison within a
/// tolerance and [`coincides_with`](Hyperplane::coincides_with) to ask whether
/// two equations describe the same set of points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hyperplane {
    normal_vector: Vector,
    constant_term: Decimal,
}

/// Intersection of two lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intersection {
    /// The lines cross at a single point.
    Point(Vector),
    /// The lines are the same line.
    Coincident,
    /// The lines are parallel and distinct.
    Empty,
}

impl Hyperplane {
    pub fn new(normal_vector: Vector, constant_term: Decimal) -> Self {
        Self {
            normal_vector,
            constant_term,
        }
    }

    /// Creates a hyperplane from raw coefficients.
    pub fn from_coefficients(
        normal: Vec<Decimal>,
        constant_term: Decimal,
    ) -> Result<Self, AlgebraError> {
        Ok(Self::new(Vector::new(normal)?, constant_term))
    }

    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    pub fn constant_term(&self) -> Decimal {
        self.constant_term
    }

    /// Coefficient of variable `i`.
    pub fn coefficient(&self, i: usize) -> Decimal {
        self.normal_vector[i]
    }

    /// Multiplies both sides of the equation by `c`.
    pub fn scale(&self, c: Decimal) -> Result<Hyperplane, AlgebraError> {
        Ok(Self::new(
            self.normal_vector.scale(c)?,
            self.constant_term.try_mul(c)?,
        ))
    }

    /// Divides both sides of the equation by `c`.
    pub fn divide(&self, c: Decimal) -> Result<Hyperplane, AlgebraError> {
        Ok(Self::new(
            self.normal_vector.divide(c)?,
            self.constant_term.try_div(c)?,
        ))
    }

    /// Adds two equations coefficient by coefficient.
    pub fn add(&self, other: &Hyperplane) -> Result<Hyperplane, AlgebraError> {
        Ok(Self::new(
            self.normal_vector.add(&other.normal_vector)?,
            self.constant_term.try_add(other.constant_term)?,
        ))
    }

    /// Index of the first coefficient whose magnitude reaches `tolerance`,
    /// or `None` if the normal vector is effectively zero.
    pub fn first_nonzero_index(&self, tolerance: Decimal) -> Option<usize> {
        self.normal_vector.first_nonzero_index(tolerance)
    }

    /// A point on the hyperplane, or `None` for a zero normal vector.
    ///
    /// The point is zero everywhere except at the leading index, where it
    /// takes the value `constant_term / leading_coefficient`.
    pub fn basepoint(&self, tolerance: Decimal) -> Result<Option<Vector>, AlgebraError> {
        let Some(i) = self.first_nonzero_index(tolerance) else {
            return Ok(None);
        };
        let mut coordinates = vec![Decimal::ZERO; self.dimension()];
        coordinates[i] = self.constant_term.try_div(self.normal_vector[i])?;
        Ok(Some(Vector::new(coordinates)?))
    }

    /// True if the normal vectors are parallel.
    pub fn is_parallel_to(
        &self,
        other: &Hyperplane,
        tolerance: Decimal,
    ) -> Result<bool, AlgebraError> {
        self.normal_vector
            .is_parallel_to(&other.normal_vector, tolerance)
    }

    /// True if both equations describe the same set of points.
    ///
    /// Two equations with zero normal vectors coincide when their constants
    /// agree.  Otherwise the vector joining their basepoints must be
    /// orthogonal to both normal vectors.
    pub fn coincides_with(
        &self,
        other: &Hyperplane,
        tolerance: Decimal,
    ) -> Result<bool, AlgebraError> {
        if self.dimension() != other.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }

        let basepoints = (self.basepoint(tolerance)?, other.basepoint(tolerance)?);
        match basepoints {
            (None, None) => Ok(self
                .constant_term
                .try_sub(other.constant_term)?
                .is_near_zero(tolerance)),
            (Some(b1), Some(b2)) => {
                let diff = b1.sub(&b2)?;
                Ok(diff.is_orthogonal_to(&self.normal_vector, tolerance)?
                    && diff.is_orthogonal_to(&other.normal_vector, tolerance)?)
            }
            _ => Ok(false),
        }
    }

    /// Coefficient-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Hyperplane, tolerance: Decimal) -> bool {
        let close = |a: Decimal, b: Decimal| match a.try_sub(b) {
            Ok(d) => d.is_near_zero(tolerance),
            Err(_) => false,
        };
        self.dimension() == other.dimension()
            && close(self.constant_term, other.constant_term)
            && self
                .normal_vector
                .iter()
                .zip(other.normal_vector.iter())
                .all(|(&a, &b)| close(a, b))
    }

    /// Intersection of two lines in the plane.
    pub fn intersection(
        &self,
        other: &Hyperplane,
        tolerance: Decimal,
    ) -> Result<Intersection, AlgebraError> {
        for line in [self, other] {
            if line.dimension() != 2 {
                return Err(AlgebraError::WrongDimension {
                    expected: 2,
                    found: line.dimension(),
                });
            }
        }

        if self.is_parallel_to(other, tolerance)? {
            if self.coincides_with(other, tolerance)? {
                return Ok(Intersection::Coincident);
            }
            return Ok(Intersection::Empty);
        }

        // Cramer's rule
        let (a, b) = (self.normal_vector[0], self.normal_vector[1]);
        let (c, d) = (other.normal_vector[0], other.normal_vector[1]);
        let (k1, k2) = (self.constant_term, other.constant_term);

        let denominator = a.try_mul(d)?.try_sub(b.try_mul(c)?)?;
        let x = d.try_mul(k1)?.try_sub(b.try_mul(k2)?)?;
        let y = a.try_mul(k2)?.try_sub(c.try_mul(k1)?)?;

        Ok(Intersection::Point(Vector::new(vec![
            x.try_div(denominator)?,
            y.try_div(denominator)?,
        ])?))
    }

    pub(crate) fn round_to_precision(&self, digits: u32) -> Hyperplane {
        Self::new(
            self.normal_vector.round_to_precision(digits),
            self.constant_term.round_to_precision(digits),
        )
    }
}

// rounds for display, dropping trailing zeros and the sign of a zero
fn display_round(x: Decimal) -> Decimal {
    let rounded = x.round_dp(DISPLAY_DECIMAL_PLACES).normalize();
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

fn write_term(coefficient: Decimal, variable: usize, is_initial_term: bool) -> String {
    let mut output = String::new();

    if coefficient.is_sign_negative() {
        output.push('-');
    } else if !is_initial_term {
        output.push('+');
    }
    if !is_initial_term {
        output.push(' ');
    }
    if coefficient.abs() != Decimal::ONE {
        output.push_str(&coefficient.abs().to_string());
    }
    output.push_str(&format!("x_{}", variable + 1));
    output
}

impl fmt::Display for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self
            .normal_vector
            .iter()
            .map(|&c| display_round(c))
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .enumerate()
            .map(|(n, (i, c))| write_term(c, i, n == 0))
            .collect::<Vec<_>>();

        if terms.is_empty() {
            write!(f, "0")?;
        } else {
            write!(f, "{}", terms.iter().join(" "))?;
        }
        write!(f, " = {}", display_round(self.constant_term))
    }
}
