use super::{Decimal, DecimalMath};

/// Largest number of significant digits a [`Decimal`] can carry.
pub const MAX_PRECISION: u32 = 28;

/// Default threshold below which a value is treated as zero (1e-10).
pub fn default_tolerance() -> Decimal {
    Decimal::new(1, 10)
}

/// Arithmetic context for row reductions.
///
/// `precision` is the number of significant digits kept after every row
/// scaling or row combination.  `tolerance` is the threshold below which a
/// coefficient is treated as zero, both when locating leading terms and when
/// deciding whether an equation `0 = c` is a contradiction.
///
/// The fields are only reachable through [`new`](DecimalContext::new), so
/// every context in use satisfies `1 <= precision <= MAX_PRECISION` and
/// `tolerance > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    precision: u32,
    tolerance: Decimal,
}

impl DecimalContext {
    /// Creates a new context.  `precision` is clamped to `1..=MAX_PRECISION`
    /// and a negative tolerance is replaced by its magnitude.  A zero
    /// tolerance becomes the smallest positive decimal, which makes the zero
    /// test exact.
    pub fn new(precision: u32, tolerance: Decimal) -> Self {
        Self {
            precision: precision.clamp(1, MAX_PRECISION),
            tolerance: tolerance.abs().max(Decimal::new(1, MAX_PRECISION)),
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn tolerance(&self) -> Decimal {
        self.tolerance
    }

    /// True if `x` lies within the zero-tolerance band.
    pub fn is_zero(&self, x: Decimal) -> bool {
        x.is_near_zero(self.tolerance)
    }

    /// Rounds `x` to the context precision.
    pub fn round(&self, x: Decimal) -> Decimal {
        x.round_to_precision(self.precision)
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            precision: MAX_PRECISION,
            tolerance: default_tolerance(),
        }
    }
}

#[test]
fn test_context_clamping() {
    let ctx = DecimalContext::new(0, Decimal::new(-1, 6));
    assert_eq!(ctx.precision(), 1);
    assert_eq!(ctx.tolerance(), Decimal::new(1, 6));

    let ctx = DecimalContext::new(64, default_tolerance());
    assert_eq!(ctx.precision(), MAX_PRECISION);
    assert!(ctx.is_zero(Decimal::new(1, 11)));
    assert!(!ctx.is_zero(Decimal::new(1, 10)));

    // a zero tolerance still treats exact zeros as zero
    let ctx = DecimalContext::new(MAX_PRECISION, Decimal::ZERO);
    assert_eq!(ctx.tolerance(), Decimal::new(1, 28));
    assert!(ctx.is_zero(Decimal::ZERO));
    assert!(ctx.is_zero(Decimal::NEGATIVE_ONE - Decimal::NEGATIVE_ONE));
    assert!(!ctx.is_zero(Decimal::new(1, 28)));
}
