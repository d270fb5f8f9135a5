//! Invokes the external MILP solver on a written `problem.lp` and reads
//! back its `solution.sol`.
//!
//! Grounded in `transit_map_generator/transit_map.py`'s `run_scip()`:
//! a solver command is run with a fixed script of sub-commands, and a
//! non-zero exit (or a missing executable) is surfaced as a solver
//! failure before any attempt to parse a solution file.

use std::path::Path;
use std::process::Command;

use transit_layout_milp::{FormulationError, Result};

/// Run `solver_command` against `problem.lp` in `work_dir`, producing
/// `solution.sol` in the same directory.
pub fn run_solver(solver_command: &str, work_dir: &Path) -> Result<()> {
    log::debug!(
        "invoking solver `{solver_command}` in {}",
        work_dir.display()
    );

    let status = Command::new(solver_command)
        .current_dir(work_dir)
        .arg("-c")
        .arg("read problem.lp")
        .arg("-c")
        .arg("optimize")
        .arg("-c")
        .arg("write solution solution.sol")
        .arg("-c")
        .arg("quit")
        .status()
        .map_err(|e| {
            FormulationError::SolverFailure(format!(
                "failed to launch solver `{solver_command}`: {e}"
            ))
        })?;

    if !status.success() {
        return Err(FormulationError::SolverFailure(format!(
            "solver `{solver_command}` exited with {status}"
        )));
    }

    Ok(())
}

/// Read `solution.sol` from `work_dir`.
pub fn read_solution(work_dir: &Path) -> Result<String> {
    let path = work_dir.join("solution.sol");
    std::fs::read_to_string(&path).map_err(|e| {
        FormulationError::SolutionParseError(format!(
            "could not read {}: {e}",
            path.display()
        ))
    })
}
