mod reduction;

use crate::algebra::*;
use crate::solver::LinearSystem;

pub(super) fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub(super) fn plane(normal: &[&str], constant: &str) -> Hyperplane {
    let normal = normal.iter().map(|s| d(s)).collect();
    Hyperplane::from_coefficients(normal, d(constant)).unwrap()
}

pub(super) fn system(rows: &[(&[&str], &str)]) -> LinearSystem {
    LinearSystem::new(rows.iter().map(|(n, c)| plane(n, c)).collect()).unwrap()
}
