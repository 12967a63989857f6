
use crate::algebra::*;

pub(super) fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub(super) fn vector(coords: &[&str]) -> Vector {
    Vector::new(coords.iter().map(|s| d(s)).collect()).unwrap()
}

pub(super) fn line(normal: [&str; 2], constant: &str) -> Hyperplane {
    Hyperplane::new(vector(&normal), d(constant))
}
