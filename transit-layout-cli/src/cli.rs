use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "transit-layout",
    about = "Generate and solve an octolinear transit map layout formulation",
    version,
    after_help = "\
Typical workflow:
  transit-layout network.json -o laid-out.json
  transit-layout network.json --debug              # print the LP formulation only
  cat network.json | transit-layout -              # read from stdin

The external solver is invoked as a subprocess; override it with --solver-command
if SCIP isn't on PATH or you prefer a different MILP solver that accepts the same
`read problem.lp` / `optimize` / `write solution solution.sol` script style."
)]
pub struct Cli {
    /// Input graph JSON file. Use - to read from stdin.
    pub input: PathBuf,

    /// Output file for the laid-out graph JSON. Prints to stdout if omitted.
    #[arg(long, short)]
    pub output_file: Option<PathBuf>,

    /// Working directory for the LP problem/solution files. A temporary
    /// directory is created and removed automatically if omitted.
    #[arg(long, short = 't')]
    pub tmp_dir: Option<PathBuf>,

    /// Print the generated LP formulation to stdout instead of solving.
    #[arg(long, short)]
    pub debug: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(long, short)]
    pub verbose: bool,

    /// Command used to invoke the external MILP solver.
    #[arg(long, default_value = "scip")]
    pub solver_command: String,
}
