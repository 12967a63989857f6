use linsys::algebra::*;
use linsys::solver::*;
use std::fs::File;

fn main() -> Result<(), SolverError> {
    let d = |s: &str| s.parse::<Decimal>().unwrap();
    let planes = vec![
        Hyperplane::from_coefficients(vec![d("1"), d("1"), d("1")], d("1"))
            .map_err(LinearSystemError::from)?,
        Hyperplane::from_coefficients(vec![d("0"), d("1"), d("-1")], d("2"))
            .map_err(LinearSystemError::from)?,
    ];
    let settings = SolverSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();
    let solver = LinearSolver::new(planes, settings)?;

    let path = std::env::temp_dir().join("linsys_demo.json");
    let mut file = File::create(&path)?;
    solver.write_to_file(&mut file)?;
    println!("wrote {}", path.display());

    let mut file = File::open(&path)?;
    let mut solver = LinearSolver::read_from_file(&mut file)?;
    solver.settings.verbose = true;
    solver.solve()?;

    Ok(())
}
