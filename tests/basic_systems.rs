use linsys::{algebra::*, solver::*};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn plane(normal: &[&str], constant: &str) -> Hyperplane {
    let normal = normal.iter().map(|s| d(s)).collect();
    Hyperplane::from_coefficients(normal, d(constant)).unwrap()
}

fn tol() -> Decimal {
    default_tolerance()
}

fn quiet_settings() -> SolverSettings {
    SolverSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap()
}

// every equation holds at `x` within tolerance
fn assert_satisfies(planes: &[Hyperplane], x: &Vector) {
    for p in planes {
        let lhs = p.normal_vector().dot(x).unwrap();
        assert!(
            (lhs - p.constant_term()).abs() < tol(),
            "{} is not satisfied by {}",
            p,
            x
        );
    }
}

#[test]
fn test_parallel_lines_without_unique_intersection() {
    let l1 = plane(&["4.046", "2.836"], "1.21");
    let l2 = plane(&["10.115", "7.09"], "3.025");
    assert!(l1.is_parallel_to(&l2, tol()).unwrap());
    assert_ne!(l1.intersection(&l2, tol()).unwrap(), Intersection::Empty);
    assert!(!matches!(
        l1.intersection(&l2, tol()).unwrap(),
        Intersection::Point(_)
    ));

    // both equations describe the same line
    let system = LinearSystem::new(vec![l1.clone(), l2]).unwrap();
    let solution = system.solve().unwrap();
    assert_eq!(solution.status(), SolverStatus::InfiniteSolutions);

    // shifting the constant leaves two distinct parallel lines
    let l3 = plane(&["10.115", "7.09"], "3.026");
    assert!(!l1.coincides_with(&l3, tol()).unwrap());
    let system = LinearSystem::new(vec![l1, l3]).unwrap();
    assert_eq!(system.solve().unwrap(), Solution::Inconsistent);
}

#[test]
fn test_dependent_planes() {
    let system = LinearSystem::new(vec![
        plane(&["1", "1", "1"], "1"),
        plane(&["2", "2", "2"], "2"),
    ])
    .unwrap();

    let solution = system.solve().unwrap();
    assert_eq!(solution.status(), SolverStatus::InfiniteSolutions);

    let p = solution.parametrization().unwrap();
    assert_eq!(p.free_variables, vec![1, 2]);
    assert_eq!(p.basepoint.coordinates(), &[d("1"), d("0"), d("0")]);
    for params in [[d("0"), d("0")], [d("2"), d("-3.5")], [d("0.1"), d("7")]] {
        let x = p.point_at(&params).unwrap();
        assert_satisfies(system.planes(), &x);
    }
}

#[test]
fn test_identity_system() {
    let planes = vec![
        plane(&["1", "0", "0"], "1"),
        plane(&["0", "1", "0"], "2"),
        plane(&["0", "0", "1"], "3"),
    ];
    let system = LinearSystem::new(planes).unwrap();

    // already triangular
    assert_eq!(system.compute_triangular_form().unwrap(), system);

    let solution = system.solve().unwrap();
    assert_eq!(
        solution.unique().unwrap().coordinates(),
        &[d("1"), d("2"), d("3")]
    );
}

#[test]
fn test_contradiction_row() {
    let contradiction = plane(&["0", "0", "0"], "5");

    let system = LinearSystem::new(vec![contradiction.clone()]).unwrap();
    assert_eq!(system.solve().unwrap(), Solution::Inconsistent);

    let system = LinearSystem::new(vec![
        plane(&["1", "0", "0"], "1"),
        plane(&["0", "1", "0"], "2"),
        contradiction.clone(),
        plane(&["0", "0", "1"], "3"),
    ])
    .unwrap();
    assert_eq!(system.solve().unwrap(), Solution::Inconsistent);

    let planes = vec![plane(&["1", "1", "1"], "1"), contradiction];
    let system = LinearSystem::new(planes).unwrap();
    assert_eq!(system.solve().unwrap(), Solution::Inconsistent);
}

#[test]
fn test_double_swap_restores_order() {
    let planes = vec![
        plane(&["1", "1", "1"], "1"),
        plane(&["0", "1", "0"], "2"),
        plane(&["1", "1", "-1"], "3"),
    ];
    let mut system = LinearSystem::new(planes.clone()).unwrap();
    system.swap_rows(0, 1).unwrap();
    assert_ne!(system.planes(), planes.as_slice());
    system.swap_rows(0, 1).unwrap();
    assert_eq!(system.planes(), planes.as_slice());
}

#[test]
fn test_three_plane_systems() {
    let planes = vec![
        plane(&["5.862", "1.178", "-10.366"], "-8.15"),
        plane(&["-2.931", "-0.589", "5.183"], "-4.075"),
    ];
    let system = LinearSystem::new(planes).unwrap();
    assert_eq!(system.solve().unwrap(), Solution::Inconsistent);

    let planes = vec![
        plane(&["8.631", "5.112", "-1.816"], "-5.113"),
        plane(&["4.315", "11.132", "-5.27"], "-6.775"),
        plane(&["-2.158", "3.01", "-1.727"], "-0.831"),
    ];
    let system = LinearSystem::new(planes.clone()).unwrap();
    let solution = system.solve().unwrap();
    assert_eq!(solution.status(), SolverStatus::InfiniteSolutions);
    let p = solution.parametrization().unwrap();
    assert_eq!(p.dimension(), 1);
    assert_satisfies(&planes, &p.point_at(&[d("1.5")]).unwrap());

    let planes = vec![
        plane(&["5.262", "2.739", "-9.878"], "-3.441"),
        plane(&["5.111", "6.358", "7.638"], "-2.152"),
        plane(&["2.016", "-9.924", "-1.367"], "-9.278"),
        plane(&["2.167", "-13.543", "-18.883"], "-10.567"),
    ];
    let system = LinearSystem::new(planes.clone()).unwrap();
    let solution = system.solve().unwrap();
    let x = solution.unique().unwrap();
    assert_satisfies(&planes, x);
    assert!((x[0] - d("-1.177")).abs() < d("0.001"));
    assert!((x[1] - d("0.707")).abs() < d("0.001"));
    assert!((x[2] - d("-0.083")).abs() < d("0.001"));
}

#[test]
fn test_overdetermined_consistent() {
    let planes = vec![
        plane(&["1", "2"], "5"),
        plane(&["3", "-1"], "1"),
        plane(&["4", "1"], "6"),
    ];
    let system = LinearSystem::new(planes.clone()).unwrap();
    let solution = system.solve().unwrap();
    assert_eq!(
        solution.unique().unwrap().coordinates(),
        &[d("1"), d("2")]
    );
    assert_eq!(system.rank().unwrap(), 2);
}

#[test]
fn test_solver_front_end() {
    let planes = vec![plane(&["2", "1"], "3"), plane(&["1", "3"], "4")];
    let mut solver = LinearSolver::new(planes, quiet_settings()).unwrap();
    assert_eq!(solver.info.status, SolverStatus::Unsolved);

    let solution = solver.solve().unwrap().clone();
    assert_eq!(solution.unique().unwrap().coordinates(), &[d("1"), d("1")]);
    assert_eq!(solver.solution, Some(solution));
    assert_eq!(solver.info.status, SolverStatus::Solved);
    assert_eq!(solver.info.equations, 2);
    assert_eq!(solver.info.variables, 2);
    assert_eq!(solver.info.rank, 2);
    assert_eq!(solver.info.free_variables, 0);
    assert!(solver.info.solve_time >= 0.0);

    // the stored system is not reduced in place
    assert_eq!(solver.system[0], plane(&["2", "1"], "3"));

    // solving again gives the same answer
    let again = solver.solve().unwrap().clone();
    assert_eq!(solver.solution, Some(again));
}

#[test]
fn test_solver_info_for_other_outcomes() {
    let planes = vec![plane(&["1", "1", "1"], "1"), plane(&["1", "1", "1"], "1")];
    let mut solver = LinearSolver::new(planes, quiet_settings()).unwrap();
    solver.solve().unwrap();
    assert_eq!(solver.info.status, SolverStatus::InfiniteSolutions);
    assert_eq!(solver.info.rank, 1);
    assert_eq!(solver.info.free_variables, 2);

    let planes = vec![plane(&["1", "1"], "1"), plane(&["1", "1"], "2")];
    let mut solver = LinearSolver::new(planes, quiet_settings()).unwrap();
    solver.solve().unwrap();
    assert_eq!(solver.info.status, SolverStatus::Inconsistent);
    assert_eq!(solver.info.free_variables, 0);
}

#[test]
fn test_solver_rejects_bad_settings() {
    let planes = vec![plane(&["1"], "1")];
    let mut settings = quiet_settings();
    settings.precision = 0;
    assert!(matches!(
        LinearSolver::new(planes.clone(), settings),
        Err(SolverError::Settings(SettingsError::BadFieldValue("precision")))
    ));

    let mut solver = LinearSolver::new(planes, quiet_settings()).unwrap();
    solver.settings.tolerance = Decimal::TWO;
    assert!(matches!(
        solver.solve(),
        Err(SolverError::Settings(SettingsError::BadFieldValue("tolerance")))
    ));
    assert!(solver.solution.is_none());
}
