//! Reading problems from files on disk

use qmc_logic::input::Problem;
use qmc_logic::{InputError, MinimizeConfig, Minimizer};
use std::io::{self, Write};
use tempfile::NamedTempFile;

fn problem_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

#[test]
fn test_read_and_minimize() -> io::Result<()> {
    let file = problem_file("0,2,5,7,8,10,13,15\nA,B,C,D\n");
    let problem = Problem::from_file(file.path())?;
    assert_eq!(problem.variables(), &["A", "B", "C", "D"]);
    assert_eq!(problem.minimize()?, "B'D' + BD");
    Ok(())
}

#[test]
fn test_comments_and_blank_lines_skipped() -> io::Result<()> {
    let file = problem_file("# majority of three\n\n3,5,6,7\n\n# names\nX,Y,Z\n");
    let problem = Problem::from_file(file.path())?;
    assert_eq!(problem.minterms(), &[3, 5, 6, 7]);
    assert_eq!(problem.minimize()?, "YZ + XZ + XY");
    Ok(())
}

#[test]
fn test_solve_with_limits() -> io::Result<()> {
    let file = problem_file("0,1,2,3,4,5,6,7\nA,B,C\n");
    let problem = Problem::from_file(file.path())?;

    let minimizer = Minimizer::new(MinimizeConfig::new().with_max_rounds(1));
    let err = problem.solve(&minimizer).unwrap_err();
    let io_err: io::Error = err.into();
    assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);

    let solution = problem.solve(&Minimizer::default())?;
    assert_eq!(solution.to_string(), "1");
    Ok(())
}

#[test]
fn test_invalid_contents() {
    let file = problem_file("0,1,x\nA,B\n");
    let err = Problem::from_file(file.path()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

    let file = problem_file("0,1,2,3\nA,B,C\n");
    let err = Problem::from_file(file.path()).unwrap_err();
    let inner = err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InputError>())
        .expect("input error expected");
    assert_eq!(
        inner,
        &InputError::VariableCountMismatch {
            expected: 2,
            got: 3
        }
    );

    let file = problem_file("# nothing here\n");
    assert!(Problem::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = Problem::from_file(dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
