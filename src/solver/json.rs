use super::*;
use crate::algebra::*;

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Reading and writing problems as JSON files.
pub trait SolverJSONReadWrite: Sized {
    /// Writes the equations and settings.
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    /// Builds a solver from a file written by `write_to_file`.
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

// Only the user supplied data is stored.  Solutions and timings
// are recomputed after reading.

#[derive(Serialize, Deserialize)]
struct JsonEquation {
    normal_vector: Vector,
    constant_term: Decimal,
}

#[derive(Serialize, Deserialize)]
struct JsonSystemData {
    equations: Vec<JsonEquation>,
    settings: SolverSettings,
}

impl SolverJSONReadWrite for LinearSolver {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json_data = JsonSystemData {
            equations: self
                .system
                .iter()
                .map(|p| JsonEquation {
                    normal_vector: p.normal_vector().clone(),
                    constant_term: p.constant_term(),
                })
                .collect(),
            settings: self.settings.clone(),
        };

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonSystemData = serde_json::from_str(&buffer)?;

        let planes = json_data
            .equations
            .into_iter()
            .map(|eq| Hyperplane::new(eq.normal_vector, eq.constant_term))
            .collect();

        Self::new(planes, json_data.settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let line = |a: i64, b: i64, c: &str| {
        let normal = vec![Decimal::from(a), Decimal::from(b)];
        Hyperplane::from_coefficients(normal, c.parse().unwrap()).unwrap()
    };
    let planes = vec![line(1, 1, "3.5"), line(1, -1, "0.5")];
    let settings = SolverSettingsBuilder::default()
        .verbose(false)
        .precision(20)
        .build()
        .unwrap();

    let mut solver = LinearSolver::new(planes, settings).unwrap();
    solver.solve().unwrap();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = LinearSolver::read_from_file(&mut file).unwrap();
    assert_eq!(solver.system, solver2.system);
    assert_eq!(solver.settings, solver2.settings);

    solver2.solve().unwrap();
    assert_eq!(solver.solution, solver2.solution);
}

#[test]
fn test_json_rejects_bad_system() {
    use std::io::{Seek, SeekFrom};

    let mut file = tempfile::tempfile().unwrap();
    let json = r#"{"equations": [], "settings": {"verbose": false}}"#;
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = LinearSolver::read_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
