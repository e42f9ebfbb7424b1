//! CLI for closed-form polynomial roots.
//!
//! Provides:
//! - Quadratic and cubic solving from the command line
//! - JSON output and residual verification
//! - Executable checks of the documented example equations

mod check;
mod say;

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::debug;
use polysolve_core::{
    fmt::Fmt, parse_log_level, roots::{residual, Roots}, Shift, Silent, Solution, Solver, SolverConfig,
};
use say::Say;

#[derive(Parser)]
#[command(name = "polysolve")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("POLYSOLVE_BUILD_SHA"), ")"))]
#[command(about = "Closed-form roots of quadratic and cubic polynomials", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence when set
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Opts {
    /// Solver configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cubic shift term: "standard" (b/3a) or "literal" (b/3·a); overrides the config file
    #[arg(short, long)]
    shift: Option<Shift>,

    /// Print the solution as JSON
    #[arg(short, long)]
    json: bool,

    /// Print the polynomial's value at each root
    #[arg(short, long)]
    verify: bool,

    /// Don't announce degenerate equations
    #[arg(short, long)]
    quiet: bool,

    /// Decimal places
    #[arg(short, long, default_value = "6")]
    precision: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a·x² + b·x + c = 0
    Quadratic {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,

        #[command(flatten)]
        opts: Opts,
    },

    /// Solve a·x³ + b·x² + c·x + d = 0
    Cubic {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
        #[arg(allow_negative_numbers = true)]
        d: f64,

        #[command(flatten)]
        opts: Opts,
    },

    /// Run the documented example equations as checks
    Check {
        /// Solver configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SolverConfig> {
    match path {
        None => Ok(SolverConfig::default()),
        Some(path) => {
            let s = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
            let config = SolverConfig::from_json(&s).with_context(|| format!("parsing config {}", path.display()))?;
            debug!("loaded {:?} from {}", config, path.display());
            Ok(config)
        },
    }
}

impl Opts {
    fn solver(&self) -> anyhow::Result<Solver> {
        let mut config = load_config(self.config.as_ref())?;
        if let Some(shift) = self.shift {
            config.shift = shift;
        }
        let solver = Solver::new(config);
        Ok(if self.quiet { solver.with_notifier(Silent) } else { solver.with_notifier(Say) })
    }

    fn print<const N: usize>(&self, coeffs: &[f64], solution: Solution<N>) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&solution)?);
        } else {
            println!("roots: {}", Roots::from(solution).s(self.precision));
            if solution.is_degenerate {
                println!("degenerate: repeated roots");
            }
        }
        if self.verify {
            for (idx, x) in solution.roots.iter().enumerate() {
                println!("p(x{}) = {}", idx + 1, residual(coeffs, *x).s(self.precision));
            }
        }
        Ok(())
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Quadratic { a, b, c, opts } => {
            let solution = opts.solver()?.quadratic(a, b, c)?;
            opts.print(&[ a, b, c ], solution)?;
        }
        Commands::Cubic { a, b, c, d, opts } => {
            let solution = opts.solver()?.cubic(a, b, c, d)?;
            opts.print(&[ a, b, c, d ], solution)?;
        }
        Commands::Check { config } => {
            let config = load_config(config.as_ref())?;
            let mut failures = 0;
            for example in check::examples() {
                match check::run(&example, config)? {
                    check::Outcome::Pass => println!("ok      {}", example.name),
                    check::Outcome::Fail { actual, degenerate } => {
                        failures += 1;
                        println!("FAILED  {}: got {}{}", example.name, actual.s(6), if degenerate { " (degenerate)" } else { "" });
                    }
                }
            }
            if failures > 0 {
                println!("{} example(s) failed", failures);
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let level = parse_log_level(cli.log_level.as_deref())?;
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    run(cli)
}
