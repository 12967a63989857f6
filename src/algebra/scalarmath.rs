use super::{AlgebraError, Decimal};

// All arithmetic on coefficients goes through this trait so that
// overflow is reported as an error instead of a panic.

/// Scalar operations on [`Decimal`](crate::algebra::Decimal)
pub trait DecimalMath: Sized {
    /// True if `|self| < tolerance`.
    fn is_near_zero(&self, tolerance: Decimal) -> bool;

    /// Rounds to at most `digits` significant digits using banker's rounding.
    ///
    /// Values that already fit are returned unchanged, as are values whose
    /// integer part alone needs more than `digits` digits.
    fn round_to_precision(&self, digits: u32) -> Self;

    /// Checked addition.
    fn try_add(&self, rhs: Self) -> Result<Self, AlgebraError>;

    /// Checked subtraction.
    fn try_sub(&self, rhs: Self) -> Result<Self, AlgebraError>;

    /// Checked multiplication.
    fn try_mul(&self, rhs: Self) -> Result<Self, AlgebraError>;

    /// Checked division.  Fails with `DivisionByZero` on an exact zero divisor.
    fn try_div(&self, rhs: Self) -> Result<Self, AlgebraError>;
}

impl DecimalMath for Decimal {
    fn is_near_zero(&self, tolerance: Decimal) -> bool {
        self.abs() < tolerance
    }

    fn round_to_precision(&self, digits: u32) -> Decimal {
        let significant = significant_digits(self);
        if significant <= digits {
            return *self;
        }
        let excess = significant - digits;
        let scale = self.scale();
        if excess > scale {
            return *self;
        }
        self.round_dp(scale - excess)
    }

    fn try_add(&self, rhs: Decimal) -> Result<Decimal, AlgebraError> {
        self.checked_add(rhs).ok_or(AlgebraError::Overflow)
    }

    fn try_sub(&self, rhs: Decimal) -> Result<Decimal, AlgebraError> {
        self.checked_sub(rhs).ok_or(AlgebraError::Overflow)
    }

    fn try_mul(&self, rhs: Decimal) -> Result<Decimal, AlgebraError> {
        self.checked_mul(rhs).ok_or(AlgebraError::Overflow)
    }

    fn try_div(&self, rhs: Decimal) -> Result<Decimal, AlgebraError> {
        if rhs.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(AlgebraError::Overflow)
    }
}

// number of decimal digits in the mantissa, counting a zero mantissa as one digit
fn significant_digits(x: &Decimal) -> u32 {
    x.mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |d| d + 1)
}

#[test]
fn test_round_to_precision() {
    let x: Decimal = "3.14159265".parse().unwrap();
    assert_eq!(x.round_to_precision(3), "3.14".parse::<Decimal>().unwrap());
    assert_eq!(x.round_to_precision(28), x);

    // banker's rounding on the midpoint
    let y: Decimal = "0.125".parse().unwrap();
    assert_eq!(y.round_to_precision(2), "0.12".parse::<Decimal>().unwrap());

    // integer part wider than the precision is left alone
    let z: Decimal = "123456.5".parse().unwrap();
    assert_eq!(z.round_to_precision(3), z);
}

#[test]
fn test_checked_arithmetic() {
    let one = Decimal::ONE;
    assert_eq!(
        one.try_div(Decimal::ZERO),
        Err(AlgebraError::DivisionByZero)
    );
    assert_eq!(Decimal::MAX.try_add(one), Err(AlgebraError::Overflow));
    assert_eq!(Decimal::MAX.try_mul(Decimal::TWO), Err(AlgebraError::Overflow));
    assert_eq!(Decimal::TWO.try_sub(one), Ok(one));
}
