mod cli;
mod solver;
mod workdir;

use std::io::Read as _;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use transit_layout_milp::{solution, RawGraph, Settings};
use workdir::ScopedWorkDir;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let input_text = read_input(&cli.input)?;
    let raw: RawGraph = serde_json::from_str(&input_text).context("parsing input graph JSON")?;

    let settings = Settings::default();
    let formulation = transit_layout_milp::build(&raw, &settings)
        .context("building the layout formulation")?;

    if cli.debug {
        print!("{}", formulation.lp_text);
        return Ok(());
    }

    let work_dir = ScopedWorkDir::new(cli.tmp_dir.clone())?;
    let problem_path = work_dir.path().join("problem.lp");
    std::fs::write(&problem_path, &formulation.lp_text)
        .with_context(|| format!("writing {}", problem_path.display()))?;

    log::info!("solving in {}", work_dir.path().display());
    solver::run_solver(&cli.solver_command, work_dir.path())?;

    let solution_text = solver::read_solution(work_dir.path())?;
    let parsed = solution::parse_solution(&solution_text)?;
    let revised = solution::revise_solution(&formulation.graph, &parsed, &settings);

    let output_text =
        serde_json::to_string_pretty(&revised).context("serializing the laid-out graph")?;

    match cli.output_file {
        Some(path) => {
            std::fs::write(&path, &output_text)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{output_text}"),
    }

    Ok(())
}

fn read_input(path: &std::path::Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading graph JSON from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}
