use linsys::algebra::*;
use linsys::solver::*;

fn plane(coeffs: &[&str], k: &str) -> Hyperplane {
    let d = |s: &str| s.parse::<Decimal>().unwrap();
    Hyperplane::from_coefficients(coeffs.iter().map(|s| d(s)).collect(), d(k)).unwrap()
}

fn main() -> Result<(), SolverError> {
    let planes = vec![
        plane(&["5.262", "2.739", "-9.878"], "-3.441"),
        plane(&["5.111", "6.358", "7.638"], "-2.152"),
        plane(&["2.016", "-9.924", "-1.367"], "-9.278"),
        plane(&["2.167", "-13.543", "-18.883"], "-10.567"),
    ];

    let settings = SolverSettingsBuilder::default()
        .print_reductions(true)
        .build()
        .unwrap();

    let mut solver = LinearSolver::new(planes, settings)?;
    solver.solve()?;

    // a system with a one dimensional solution set, solved quietly
    let planes = vec![
        plane(&["8.631", "5.112", "-1.816"], "-5.113"),
        plane(&["4.315", "11.132", "-5.27"], "-6.775"),
        plane(&["-2.158", "3.01", "-1.727"], "-0.831"),
    ];
    let system = LinearSystem::new(planes)?;
    println!("\n{}", system);
    println!("{}", system.solve()?);

    Ok(())
}
