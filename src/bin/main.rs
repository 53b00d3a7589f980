use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use simplex_trace::algorithm::projection::{project, Viewport};
use simplex_trace::algorithm::reconstruct::{reconstruct, Snapshot};
use simplex_trace::data::linear_program::canonical_form::CanonicalForm;
use simplex_trace::io::{Format, import, Leniency};
use simplex_trace::io::wire::{SolveRequest, SolveResponse};

/// Reads linear programs and retraces the tableaus of a Simplex solver.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Log more, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the solve request for a problem file as JSON
    Parse(Problem),
    /// Print the steps of a solver response
    Narrate {
        #[command(flatten)]
        problem: Problem,
        /// File containing the JSON response of the solver
        response_file: PathBuf,
        /// Print the steps as JSON instead of as text tableaus
        #[arg(long)]
        json: bool,
    },
    /// Print the solution path in pixel coordinates, projected on two variables
    Project {
        #[command(flatten)]
        problem: Problem,
        /// File containing the JSON response of the solver
        response_file: PathBuf,
        /// Variable on the horizontal axis, counting from 1
        #[arg(long, default_value_t = 1)]
        x: usize,
        /// Variable on the vertical axis, counting from 1
        #[arg(long, default_value_t = 2)]
        y: usize,
        /// Width of the drawing region in pixels
        #[arg(long, default_value_t = Viewport::default().width)]
        width: f64,
        /// Height of the drawing region in pixels
        #[arg(long, default_value_t = Viewport::default().height)]
        height: f64,
        /// Empty space on every side of the drawing region
        #[arg(long, default_value_t = Viewport::default().margin)]
        margin: f64,
    },
}

#[derive(Args)]
struct Problem {
    /// File containing the problem description
    problem_file: PathBuf,
    /// Notation of the problem file, derived from the extension by default
    #[arg(long, value_enum)]
    format: Option<Notation>,
    /// Reject malformed numbers and constraints without relation
    #[arg(long)]
    strict: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Notation {
    Standardized,
    Copt,
}

impl From<Notation> for Format {
    fn from(notation: Notation) -> Self {
        match notation {
            Notation::Standardized => Format::Standardized,
            Notation::Copt => Format::Copt,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match opts.command {
        Command::Parse(problem) => {
            let program = read_problem(&problem)?;
            println!("{}", serde_json::to_string_pretty(&SolveRequest::from(&program))?);
        },
        Command::Narrate { problem, response_file, json } => {
            let program = read_problem(&problem)?;
            let reconstruction = reconstruct(program.objective(), &read_response(&response_file)?);

            if json {
                println!("{}", serde_json::to_string_pretty(&reconstruction)?);
            } else {
                for step in &reconstruction.steps {
                    println!("{}\n", step);
                }
            }
        },
        Command::Project { problem, response_file, x, y, width, height, margin } => {
            let program = read_problem(&problem)?;
            let reconstruction = reconstruct(program.objective(), &read_response(&response_file)?);

            let axes = (
                x.checked_sub(1).context("Variables are counted from 1")?,
                y.checked_sub(1).context("Variables are counted from 1")?,
            );
            let viewport = Viewport { width, height, margin };
            let projection = project(reconstruction.path.trajectory(), axes, &viewport)?;
            println!("{}", serde_json::to_string_pretty(&projection)?);
        },
    }

    Ok(())
}

fn read_problem(problem: &Problem) -> anyhow::Result<CanonicalForm> {
    let leniency = if problem.strict { Leniency::Strict } else { Leniency::Lenient };
    log::info!("Reading problem file: \"{}\"...", problem.problem_file.display());

    import(&problem.problem_file, problem.format.map(Format::from), leniency)
        .with_context(|| format!("Couldn't read the problem in {}", problem.problem_file.display()))
}

fn read_response(response_file: &Path) -> anyhow::Result<Vec<Snapshot>> {
    let text = fs::read_to_string(response_file)
        .with_context(|| format!("Couldn't read the solver response in {}", response_file.display()))?;
    let response: SolveResponse = serde_json::from_str(&text).context("Malformed solver response")?;

    Ok(response.into_snapshots()?)
}
