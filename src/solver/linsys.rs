use super::LinearSystemError;
use crate::algebra::*;
use std::fmt;
use std::ops::Index;

/// An ordered collection of equations sharing one dimension.
///
/// Rows are addressed by their position.  The row operations mutate the
/// system in place and every scaled or combined row is rounded to the
/// precision of the system's [`DecimalContext`].  The solving methods in
/// this module never touch `self` and work on a private copy instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSystem {
    planes: Vec<Hyperplane>,
    dimension: usize,
    context: DecimalContext,
}

impl LinearSystem {
    /// Creates a system with the default [`DecimalContext`].
    pub fn new(planes: Vec<Hyperplane>) -> Result<Self, LinearSystemError> {
        Self::with_context(planes, DecimalContext::default())
    }

    /// Creates a system that reduces with the given precision and tolerance.
    pub fn with_context(
        planes: Vec<Hyperplane>,
        context: DecimalContext,
    ) -> Result<Self, LinearSystemError> {
        let dimension = planes
            .first()
            .ok_or(LinearSystemError::EmptySystem)?
            .dimension();

        if let Some((row, plane)) = planes
            .iter()
            .enumerate()
            .find(|(_, p)| p.dimension() != dimension)
        {
            return Err(LinearSystemError::DimensionMismatch {
                row,
                expected: dimension,
                found: plane.dimension(),
            });
        }

        Ok(Self {
            planes,
            dimension,
            context,
        })
    }

    /// Number of equations.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Always false for a constructed system.
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Number of variables.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn context(&self) -> &DecimalContext {
        &self.context
    }

    pub fn planes(&self) -> &[Hyperplane] {
        &self.planes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hyperplane> {
        self.planes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Hyperplane> {
        self.planes.get(index)
    }

    /// Replaces the equation at `index`.
    pub fn set(&mut self, index: usize, plane: Hyperplane) -> Result<(), LinearSystemError> {
        self.check_row(index)?;
        if plane.dimension() != self.dimension {
            return Err(LinearSystemError::DimensionMismatch {
                row: index,
                expected: self.dimension,
                found: plane.dimension(),
            });
        }
        self.planes[index] = plane;
        Ok(())
    }

    fn check_row(&self, index: usize) -> Result<(), LinearSystemError> {
        if index >= self.len() {
            return Err(LinearSystemError::RowOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Exchanges rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), LinearSystemError> {
        self.check_row(i)?;
        self.check_row(j)?;
        self.planes.swap(i, j);
        Ok(())
    }

    /// Replaces row `i` by `c` times itself.
    pub fn scale_row(&mut self, c: Decimal, i: usize) -> Result<(), LinearSystemError> {
        self.check_row(i)?;
        let scaled = self.planes[i].scale(c)?;
        self.planes[i] = scaled.round_to_precision(self.context.precision());
        Ok(())
    }

    /// Replaces row `dst` by `row_dst + c * row_src`.
    pub fn add_scaled_row(
        &mut self,
        c: Decimal,
        src: usize,
        dst: usize,
    ) -> Result<(), LinearSystemError> {
        self.check_row(src)?;
        self.check_row(dst)?;
        let combined = self.planes[dst].add(&self.planes[src].scale(c)?)?;
        self.planes[dst] = combined.round_to_precision(self.context.precision());
        Ok(())
    }

    // divides row `i` through by its coefficient in column `col`, leaving
    // exactly one there
    pub(crate) fn normalize_row(&mut self, i: usize, col: usize) -> Result<(), LinearSystemError> {
        self.check_row(i)?;
        let pivot = self.planes[i].coefficient(col);
        let divided = self.planes[i].divide(pivot)?;
        self.planes[i] = divided.round_to_precision(self.context.precision());
        Ok(())
    }

    /// Leading variable of every row, `None` for rows whose coefficients all
    /// fall inside the zero tolerance.
    pub fn leading_indices(&self) -> Vec<Option<usize>> {
        self.planes
            .iter()
            .map(|p| p.first_nonzero_index(self.context.tolerance()))
            .collect()
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;
    fn index(&self, i: usize) -> &Hyperplane {
        &self.planes[i]
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type Item = &'a Hyperplane;
    type IntoIter = std::slice::Iter<'a, Hyperplane>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linear System:")?;
        for (k, plane) in self.planes.iter().enumerate() {
            write!(f, "\nEquation {}: {}", k + 1, plane)?;
        }
        Ok(())
    }
}
