use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, warn};

use quadroot::{
    Config, Solution,
    form::{FormInput, RawForm},
    logging::init_logging,
    present::{OutputFormat, Report},
    solve,
};

/// Find a root of a0 + a1·x + a2·x² = target on [left, right] by bisection
#[derive(Parser)]
#[command(name = "quadroot", version)]
struct Cli {
    #[command(flatten)]
    form: RawForm,

    /// Maximum number of bisection steps
    #[arg(long, default_value_t = Config::DEFAULT_MAX_ITERS)]
    max_iters: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Exit status when the interval holds no guaranteed root.
const EXIT_NOT_FOUND: u8 = 1;

/// Exit status when a field is rejected.
const EXIT_INVALID_INPUT: u8 = 2;

/// Exit status when the result cannot be written.
const EXIT_FAILURE: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let (report, code) = match FormInput::parse(&cli.form, cli.max_iters) {
        Ok(input) => {
            debug!(
                a0 = input.quadratic.a0,
                a1 = input.quadratic.a1,
                a2 = input.quadratic.a2,
                target = input.target,
                left = input.bracket[0],
                right = input.bracket[1],
                eps = input.config.eps(),
                max_iters = input.config.max_iters(),
                "solving"
            );

            let solution = solve(&input.quadratic, input.target, input.bracket, &input.config);
            let code = match solution {
                Solution::Found(root) => {
                    debug!(
                        x = root.x,
                        error = root.error,
                        iters = root.iters,
                        termination = ?root.termination,
                        "root found"
                    );
                    if !root.termination.met_tolerance() {
                        warn!(error = root.error, "stopped before reaching the requested tolerance");
                    }
                    ExitCode::SUCCESS
                }
                Solution::NotFound(reason) => {
                    debug!(?reason, "no root in interval");
                    ExitCode::from(EXIT_NOT_FOUND)
                }
            };
            (Report::from_solution(&solution), code)
        }
        Err(e) => {
            warn!("rejected input: {e}");
            (Report::InvalidInput, ExitCode::from(EXIT_INVALID_INPUT))
        }
    };

    let rendered = report
        .render(cli.format)
        .context("failed to render result")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("failed to write result")?;
    Ok(code)
}
