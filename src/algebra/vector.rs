use super::{AlgebraError, Decimal, DecimalMath};
use itertools::Itertools;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::MathematicalOps;
use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-empty vector of exact decimal coordinates.
///
/// Arithmetic returns new vectors and never mutates its operands.  Binary
/// operations check that both operands share a dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Decimal>", into = "Vec<Decimal>")
)]
pub struct Vector {
    coordinates: Vec<Decimal>,
}

impl Vector {
    /// Creates a vector from its coordinates.
    pub fn new(coordinates: Vec<Decimal>) -> Result<Self, AlgebraError> {
        if coordinates.is_empty() {
            return Err(AlgebraError::EmptyCoordinates);
        }
        Ok(Self { coordinates })
    }

    /// The zero vector of dimension `n`.
    pub fn zeros(n: usize) -> Result<Self, AlgebraError> {
        Self::new(vec![Decimal::ZERO; n])
    }

    /// Creates a vector from floating point coordinates.
    pub fn from_f64s(coordinates: &[f64]) -> Result<Self, AlgebraError> {
        let coordinates = coordinates
            .iter()
            .map(|&x| Decimal::from_f64(x).ok_or(AlgebraError::NonFinite))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coordinates)
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.coordinates.iter()
    }

    fn check_dimension(&self, other: &Vector) -> Result<(), AlgebraError> {
        if self.dimension() != other.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with(
        &self,
        other: &Vector,
        op: impl Fn(&Decimal, Decimal) -> Result<Decimal, AlgebraError>,
    ) -> Result<Vector, AlgebraError> {
        self.check_dimension(other)?;
        let coordinates = self
            .iter()
            .zip(other.iter())
            .map(|(x, &y)| op(x, y))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Vector { coordinates })
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector, AlgebraError> {
        self.zip_with(other, Decimal::try_add)
    }

    /// Elementwise difference `self - other`.
    pub fn sub(&self, other: &Vector) -> Result<Vector, AlgebraError> {
        self.zip_with(other, Decimal::try_sub)
    }

    /// Multiplies every coordinate by `c`.
    pub fn scale(&self, c: Decimal) -> Result<Vector, AlgebraError> {
        let coordinates = self
            .iter()
            .map(|x| x.try_mul(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Vector { coordinates })
    }

    /// Divides every coordinate by `c`.
    pub fn divide(&self, c: Decimal) -> Result<Vector, AlgebraError> {
        let coordinates = self
            .iter()
            .map(|x| x.try_div(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Vector { coordinates })
    }

    pub fn dot(&self, other: &Vector) -> Result<Decimal, AlgebraError> {
        self.check_dimension(other)?;
        self.iter()
            .zip(other.iter())
            .try_fold(Decimal::ZERO, |acc, (x, &y)| acc.try_add(x.try_mul(y)?))
    }

    /// Sum of squares of the coordinates.
    pub fn sumsq(&self) -> Result<Decimal, AlgebraError> {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> Result<Decimal, AlgebraError> {
        self.sumsq()?.sqrt().ok_or(AlgebraError::Overflow)
    }

    /// Unit vector in the direction of `self`.
    pub fn normalize(&self) -> Result<Vector, AlgebraError> {
        let magnitude = self.magnitude()?;
        if magnitude.is_zero() {
            return Err(AlgebraError::ZeroVector);
        }
        self.divide(magnitude)
    }

    /// True if every coordinate is within `tolerance` of zero.
    pub fn is_zero(&self, tolerance: Decimal) -> bool {
        self.iter().all(|x| x.is_near_zero(tolerance))
    }

    /// Angle between `self` and `other` in radians.
    pub fn angle(&self, other: &Vector) -> Result<Decimal, AlgebraError> {
        let denominator = self.magnitude()?.try_mul(other.magnitude()?)?;
        if denominator.is_zero() {
            return Err(AlgebraError::ZeroVector);
        }
        let cosine = self
            .dot(other)?
            .try_div(denominator)?
            .clamp(Decimal::NEGATIVE_ONE, Decimal::ONE);
        let radians = cosine.to_f64().ok_or(AlgebraError::NonFinite)?.acos();
        Decimal::from_f64(radians).ok_or(AlgebraError::NonFinite)
    }

    /// Angle between `self` and `other` in degrees.
    pub fn angle_degrees(&self, other: &Vector) -> Result<Decimal, AlgebraError> {
        let radians = self
            .angle(other)?
            .to_f64()
            .ok_or(AlgebraError::NonFinite)?;
        Decimal::from_f64(radians.to_degrees()).ok_or(AlgebraError::NonFinite)
    }

    /// True if the dot product vanishes within `tolerance`.
    pub fn is_orthogonal_to(
        &self,
        other: &Vector,
        tolerance: Decimal,
    ) -> Result<bool, AlgebraError> {
        Ok(self.dot(other)?.is_near_zero(tolerance))
    }

    /// True if one vector is a scalar multiple of the other.
    ///
    /// The zero vector is parallel to every vector.  Otherwise every 2x2
    /// minor `x_i y_j - x_j y_i` must vanish, within `tolerance` scaled by
    /// the largest coordinate magnitudes of the two vectors.
    pub fn is_parallel_to(
        &self,
        other: &Vector,
        tolerance: Decimal,
    ) -> Result<bool, AlgebraError> {
        self.check_dimension(other)?;
        if self.is_zero(tolerance) || other.is_zero(tolerance) {
            return Ok(true);
        }
        let scale = Decimal::max(
            Decimal::ONE,
            self.norm_inf().try_mul(other.norm_inf())?,
        );
        let threshold = tolerance.try_mul(scale)?;

        for (i, j) in (0..self.dimension()).tuple_combinations() {
            let minor = self[i]
                .try_mul(other[j])?
                .try_sub(self[j].try_mul(other[i])?)?;
            if !minor.is_near_zero(threshold) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Largest coordinate magnitude.
    pub fn norm_inf(&self) -> Decimal {
        self.iter().map(|x| x.abs()).max().unwrap_or(Decimal::ZERO)
    }

    /// Component of `self` parallel to `basis`.
    pub fn projection_onto(&self, basis: &Vector) -> Result<Vector, AlgebraError> {
        let denominator = basis.sumsq()?;
        if denominator.is_zero() {
            return Err(AlgebraError::ZeroVector);
        }
        let weight = self.dot(basis)?.try_div(denominator)?;
        basis.scale(weight)
    }

    /// Component of `self` orthogonal to `basis`.
    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector, AlgebraError> {
        self.sub(&self.projection_onto(basis)?)
    }

    /// Cross product of two 3-vectors.
    pub fn cross(&self, other: &Vector) -> Result<Vector, AlgebraError> {
        for v in [self, other] {
            if v.dimension() != 3 {
                return Err(AlgebraError::WrongDimension {
                    expected: 3,
                    found: v.dimension(),
                });
            }
        }
        let (x1, y1, z1) = (self[0], self[1], self[2]);
        let (x2, y2, z2) = (other[0], other[1], other[2]);
        let coordinates = vec![
            y1.try_mul(z2)?.try_sub(y2.try_mul(z1)?)?,
            x2.try_mul(z1)?.try_sub(x1.try_mul(z2)?)?,
            x1.try_mul(y2)?.try_sub(x2.try_mul(y1)?)?,
        ];
        Ok(Vector { coordinates })
    }

    /// Area of the parallelogram spanned by two 3-vectors.
    pub fn parallelogram_area(&self, other: &Vector) -> Result<Decimal, AlgebraError> {
        self.cross(other)?.magnitude()
    }

    /// Area of the triangle spanned by two 3-vectors.
    pub fn triangle_area(&self, other: &Vector) -> Result<Decimal, AlgebraError> {
        self.parallelogram_area(other)?.try_div(Decimal::TWO)
    }

    /// Index of the first coordinate whose magnitude reaches `tolerance`.
    pub fn first_nonzero_index(&self, tolerance: Decimal) -> Option<usize> {
        self.iter().position(|x| !x.is_near_zero(tolerance))
    }

    pub(crate) fn round_to_precision(&self, digits: u32) -> Vector {
        let coordinates = self.iter().map(|x| x.round_to_precision(digits)).collect();
        Vector { coordinates }
    }
}

impl Index<usize> for Vector {
    type Output = Decimal;
    fn index(&self, i: usize) -> &Decimal {
        &self.coordinates[i]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Decimal>> for Vector {
    type Error = AlgebraError;
    fn try_from(coordinates: Vec<Decimal>) -> Result<Self, Self::Error> {
        Vector::new(coordinates)
    }
}

impl From<Vector> for Vec<Decimal> {
    fn from(v: Vector) -> Self {
        v.coordinates
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector: ({})",
            self.iter().map(|x| x.normalize()).join(", ")
        )
    }
}
