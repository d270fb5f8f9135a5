//! Error types for the transit-layout-milp library.

use thiserror::Error;

/// Errors that can occur while building or reading back an octolinear
/// layout MILP formulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulationError {
    /// The input graph is malformed: a missing field, an edge referencing
    /// an unknown node, or a direction index outside `0..=7`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The external MILP solver subprocess failed or could not be found.
    #[error("solver failed: {0}")]
    SolverFailure(String),

    /// The solver's solution file was missing an expected variable or was
    /// otherwise unparseable.
    #[error("solution parse error: {0}")]
    SolutionParseError(String),
}

/// Result type alias for transit-layout-milp operations.
pub type Result<T> = std::result::Result<T, FormulationError>;
