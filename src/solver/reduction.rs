//! Gaussian elimination on [`LinearSystem`].
//!
//! The public methods clone the system and reduce the clone, so a shared
//! system can be solved from several threads at once.  The in-place steps
//! are crate visible for the solver front end, which times each of them.

use super::*;
use crate::algebra::*;

impl LinearSystem {
    /// Row-echelon form of the system.
    ///
    /// Leading variables strictly increase down the rows that have one and
    /// rows with no leading term sit below all of them.  Rows are swapped
    /// and combined but never scaled.
    pub fn compute_triangular_form(&self) -> Result<LinearSystem, LinearSystemError> {
        let mut system = self.clone();
        system.triangularize()?;
        Ok(system)
    }

    /// Reduced row-echelon form of the system.
    ///
    /// Every leading coefficient is exactly one and is the only nonzero
    /// entry in its column.
    pub fn compute_rref(&self) -> Result<LinearSystem, LinearSystemError> {
        let mut system = self.compute_triangular_form()?;
        system.back_substitute()?;
        Ok(system)
    }

    /// Number of linearly independent equations.
    pub fn rank(&self) -> Result<usize, LinearSystemError> {
        Ok(self.compute_triangular_form()?.pivot_count())
    }

    /// Solves the system.
    ///
    /// Inconsistency takes precedence: a system with any equation that
    /// reduces to `0 = c` for nonzero `c` is [`Solution::Inconsistent`] no
    /// matter what the other rows say.
    pub fn solve(&self) -> Result<Solution, LinearSystemError> {
        self.compute_rref()?.extract_solution()
    }

    pub(crate) fn pivot_count(&self) -> usize {
        self.leading_indices().iter().flatten().count()
    }

    pub(crate) fn triangularize(&mut self) -> Result<(), LinearSystemError> {
        let mut pivot_row = 0;

        for col in 0..self.dimension() {
            if pivot_row >= self.len() {
                break;
            }

            let leading = self.leading_indices();
            if leading[pivot_row] != Some(col) {
                match (pivot_row + 1..self.len()).find(|&i| leading[i] == Some(col)) {
                    Some(i) => self.swap_rows(pivot_row, i)?,
                    // column already clear below the cursor
                    None => continue,
                }
            }

            let pivot = self[pivot_row].coefficient(col);
            let leading = self.leading_indices();
            for row in pivot_row + 1..self.len() {
                if leading[row] == Some(col) {
                    let target = self[row].coefficient(col);
                    let multiple = -(target.try_div(pivot)?);
                    self.add_scaled_row(multiple, pivot_row, row)?;
                }
            }

            pivot_row += 1;
        }
        Ok(())
    }

    // expects echelon form
    pub(crate) fn back_substitute(&mut self) -> Result<(), LinearSystemError> {
        let leading = self.leading_indices();

        for row in (0..self.len()).rev() {
            let Some(col) = leading[row] else {
                continue;
            };

            if self[row].coefficient(col) != Decimal::ONE {
                self.normalize_row(row, col)?;
            }

            for above in 0..row {
                let coeff = self[above].coefficient(col);
                if !self.context().is_zero(coeff) {
                    self.add_scaled_row(-coeff, row, above)?;
                }
            }
        }
        Ok(())
    }

    // expects reduced row-echelon form
    pub(crate) fn extract_solution(self) -> Result<Solution, LinearSystemError> {
        let context = *self.context();
        let leading = self.leading_indices();
        let mut assigned: Vec<Option<Decimal>> = vec![None; self.dimension()];

        for (row, lead) in leading.iter().enumerate() {
            let constant = self[row].constant_term();
            match lead {
                None if !context.is_zero(constant) => return Ok(Solution::Inconsistent),
                None => {}
                Some(col) => assigned[*col] = Some(constant),
            }
        }

        let free_variables: Vec<usize> = assigned
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| i)
            .collect();

        if free_variables.is_empty() {
            let point = assigned.into_iter().flatten().collect();
            return Ok(Solution::Unique(Vector::new(point)?));
        }

        let basepoint = Vector::new(
            assigned
                .iter()
                .map(|x| x.unwrap_or(Decimal::ZERO))
                .collect(),
        )?;

        let mut direction_vectors = Vec::with_capacity(free_variables.len());
        for &free in &free_variables {
            let mut direction = vec![Decimal::ZERO; self.dimension()];
            direction[free] = Decimal::ONE;
            for (row, lead) in leading.iter().enumerate() {
                if let Some(col) = lead {
                    direction[*col] = -self[row].coefficient(free);
                }
            }
            direction_vectors.push(Vector::new(direction)?);
        }

        Ok(Solution::Infinite(Parametrization {
            free_variables,
            basepoint,
            direction_vectors,
            rref: self,
        }))
    }
}
