use super::SettingsError;
use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for the [`LinearSolver`](crate::solver::LinearSolver).
///
/// Build with [`SolverSettingsBuilder`], which validates on `build()`:
///
/// ```
/// use linsys::solver::SolverSettingsBuilder;
///
/// let settings = SolverSettingsBuilder::default()
///     .verbose(false)
///     .precision(12)
///     .build()
///     .unwrap();
/// assert_eq!(settings.precision, 12);
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverSettings {
    ///verbose printing
    #[builder(default = "true")]
    pub verbose: bool,

    ///significant digits kept after every row operation (1 to 28)
    #[builder(default = "MAX_PRECISION")]
    pub precision: u32,

    ///magnitude below which a coefficient counts as zero
    #[builder(default = "default_tolerance()")]
    pub tolerance: Decimal,

    ///print the triangular and reduced row-echelon forms while solving
    #[builder(default = "false")]
    pub print_reductions: bool,
}

impl Default for SolverSettings {
    fn default() -> SolverSettings {
        SolverSettingsBuilder::default().build().unwrap()
    }
}

impl SolverSettings {
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_precision(self.precision)?;
        validate_tolerance(self.tolerance)?;
        Ok(())
    }

    /// The arithmetic context the solver reduces with.
    pub fn context(&self) -> DecimalContext {
        DecimalContext::new(self.precision, self.tolerance)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SolverSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SolverSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl SolverSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(precision) = self.precision {
            validate_precision(precision)?;
        }
        if let Some(tolerance) = self.tolerance {
            validate_tolerance(tolerance)?;
        }
        Ok(())
    }
}

fn validate_precision(precision: u32) -> Result<(), SettingsError> {
    if (1..=MAX_PRECISION).contains(&precision) {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("precision"))
    }
}

fn validate_tolerance(tolerance: Decimal) -> Result<(), SettingsError> {
    if tolerance > Decimal::ZERO && tolerance < Decimal::ONE {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("tolerance"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    SolverSettingsBuilder::default().build().unwrap();

    assert!(SolverSettingsBuilder::default()
        .precision(0)
        .build()
        .is_err());
    assert!(SolverSettingsBuilder::default()
        .precision(29)
        .build()
        .is_err());
    assert!(SolverSettingsBuilder::default()
        .tolerance(Decimal::ONE)
        .build()
        .is_err());
    assert!(SolverSettingsBuilder::default()
        .tolerance(Decimal::ZERO)
        .build()
        .is_err());

    // fields edited after construction are caught by validate()
    let mut settings = SolverSettings::default();
    assert!(settings.validate().is_ok());
    settings.tolerance = Decimal::NEGATIVE_ONE;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("tolerance"))
    );
}

#[test]
fn test_settings_context() {
    let settings = SolverSettingsBuilder::default()
        .precision(6)
        .tolerance(Decimal::new(1, 4))
        .build()
        .unwrap();
    let ctx = settings.context();
    assert_eq!(ctx.precision(), 6);
    assert!(ctx.is_zero(Decimal::new(5, 5)));
}
