use super::{d, plane, system};
use crate::algebra::*;
use crate::solver::*;

#[test]
fn test_triangular_form() {
    let s = system(&[
        (&["1", "1", "1"], "1"),
        (&["0", "1", "0"], "2"),
        (&["1", "1", "-1"], "3"),
        (&["1", "0", "-2"], "2"),
    ]);
    let t = s.compute_triangular_form().unwrap();

    assert_eq!(t[0], plane(&["1", "1", "1"], "1"));
    assert_eq!(t[1], plane(&["0", "1", "0"], "2"));
    assert_eq!(t[2], plane(&["0", "0", "-2"], "2"));
    assert_eq!(t[3], plane(&["0", "0", "0"], "0"));

    // the original is untouched
    assert_eq!(s[2], plane(&["1", "1", "-1"], "3"));
}

#[test]
fn test_triangular_form_sinks_zero_rows() {
    let s = system(&[(&["0", "0"], "0"), (&["0", "1"], "2"), (&["1", "0"], "1")]);
    let t = s.compute_triangular_form().unwrap();
    assert_eq!(t.leading_indices(), vec![Some(0), Some(1), None]);
}

#[test]
fn test_triangular_form_swaps_pivot_up() {
    // the first equation has no x_1 term
    let s = system(&[
        (&["0", "1", "1"], "1"),
        (&["1", "1", "1"], "2"),
        (&["0", "0", "1"], "3"),
    ]);
    let t = s.compute_triangular_form().unwrap();
    assert_eq!(t.leading_indices(), vec![Some(0), Some(1), Some(2)]);
    assert_eq!(t[0], plane(&["1", "1", "1"], "2"));
}

#[test]
fn test_triangular_form_skips_cleared_columns() {
    let s = system(&[(&["1", "1", "1"], "1"), (&["2", "2", "3"], "5")]);
    let t = s.compute_triangular_form().unwrap();
    assert_eq!(t.leading_indices(), vec![Some(0), Some(2)]);
    assert_eq!(t[1], plane(&["0", "0", "1"], "3"));
}

#[test]
fn test_rref() {
    let s = system(&[
        (&["1", "1", "1"], "1"),
        (&["0", "1", "0"], "2"),
        (&["1", "1", "-1"], "3"),
        (&["1", "0", "-2"], "2"),
    ]);
    let r = s.compute_rref().unwrap();

    assert_eq!(r[0], plane(&["1", "0", "0"], "0"));
    assert_eq!(r[1], plane(&["0", "1", "0"], "2"));
    assert_eq!(r[2], plane(&["0", "0", "1"], "-1"));
    assert_eq!(r[3], plane(&["0", "0", "0"], "0"));
    assert_eq!(s.rank().unwrap(), 3);
}

#[test]
fn test_rref_pivots_are_exactly_one() {
    let s = system(&[(&["3", "1"], "1"), (&["1", "7"], "2")]);
    let r = s.compute_rref().unwrap();
    for (row, lead) in r.leading_indices().into_iter().enumerate() {
        let col = lead.unwrap();
        assert_eq!(r[row].coefficient(col), Decimal::ONE);
        for other in 0..r.len() {
            if other != row {
                assert!(r[other].coefficient(col).is_near_zero(default_tolerance()));
            }
        }
    }
}

#[test]
fn test_unique_solution() {
    let s = system(&[
        (&["1", "1", "1"], "1"),
        (&["0", "1", "0"], "2"),
        (&["1", "1", "-1"], "3"),
        (&["1", "0", "-2"], "2"),
    ]);
    let solution = s.solve().unwrap();
    assert_eq!(solution.status(), SolverStatus::Solved);
    let x = solution.unique().unwrap();
    assert_eq!(x.coordinates(), &[d("0"), d("2"), d("-1")]);
}

#[test]
fn test_inconsistent_takes_precedence() {
    let s = system(&[(&["1", "0"], "1"), (&["0", "0"], "5"), (&["0", "1"], "2")]);
    assert_eq!(s.solve().unwrap(), Solution::Inconsistent);
}

#[test]
fn test_parametrization() {
    let s = system(&[(&["1", "1", "1"], "1"), (&["0", "1", "-1"], "2")]);
    let solution = s.solve().unwrap();
    let p = solution.parametrization().unwrap();

    assert_eq!(p.free_variables, vec![2]);
    assert_eq!(p.dimension(), 1);
    assert_eq!(p.basepoint.coordinates(), &[d("-1"), d("2"), d("0")]);
    assert_eq!(p.direction_vectors.len(), 1);
    assert_eq!(p.direction_vectors[0].coordinates(), &[d("-2"), d("1"), d("1")]);
    assert_eq!(p.rref[0], plane(&["1", "0", "2"], "-1"));

    let point = p.point_at(&[d("3")]).unwrap();
    assert_eq!(point.coordinates(), &[d("-7"), d("5"), d("3")]);
    for plane in s.iter() {
        assert_eq!(plane.normal_vector().dot(&point).unwrap(), plane.constant_term());
    }

    assert!(matches!(
        p.point_at(&[]),
        Err(LinearSystemError::Algebra(AlgebraError::DimensionMismatch { .. }))
    ));
}

#[test]
fn test_residue_below_tolerance_is_zero() {
    // the second row differs from twice the first by 1e-11 in its constant
    let s = system(&[(&["1", "1"], "1"), (&["2", "2"], "2.00000000001")]);
    assert_eq!(s.solve().unwrap().status(), SolverStatus::InfiniteSolutions);

    let s = system(&[(&["1", "1"], "1"), (&["2", "2"], "2.000001")]);
    assert_eq!(s.solve().unwrap().status(), SolverStatus::Inconsistent);
}

#[test]
fn test_degenerate_context_is_clamped() {
    // zero precision and zero tolerance are clamped by the context
    let context = DecimalContext::new(0, Decimal::ZERO);
    assert_eq!(context.precision(), 1);
    assert!(context.tolerance() > Decimal::ZERO);

    let planes = vec![plane(&["0", "2"], "4"), plane(&["1", "0"], "3")];
    let s = LinearSystem::with_context(planes, context).unwrap();
    assert_eq!(s.context(), &context);

    // exact zeros are never taken as pivots
    let t = s.compute_triangular_form().unwrap();
    assert_eq!(t.leading_indices(), vec![Some(0), Some(1)]);

    let x = s.solve().unwrap();
    assert_eq!(x.unique().unwrap().coordinates(), &[d("3"), d("2")]);
}
