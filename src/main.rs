//! Command line alphametic solver. Reads a formula from the command line, or asks for one.

use alphamatic::{Alphamatic, BadInput};
use argh::FromArgs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// alph-a-matic: solve alphametics like 'send+more=money'
#[derive(Debug, Clone, FromArgs)]
struct Config {
    /// the formula to solve; if missing, it's read from stdin
    #[argh(positional)]
    formula: Option<String>,

    /// don't log anything besides the solutions
    #[argh(switch, short = 'q', long = "quiet")]
    quiet: bool,

    /// log how long solving took
    #[argh(switch, long = "log-elapsed")]
    log_elapsed: bool,

    /// split the search across threads
    #[argh(switch, long = "parallel")]
    parallel: bool,

    /// show a table of letters for each solution
    #[argh(switch, long = "letters")]
    letters: bool,

    /// stop after this many solutions
    #[argh(option, short = 'n', long = "limit")]
    limit: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] BadInput),

    #[error("reading formula: {0}")]
    Io(#[from] io::Error),
}

fn read_formula() -> io::Result<String> {
    print!("Input formula: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn run(config: Config) -> Result<(), CliError> {
    let formula = match config.formula {
        Some(formula) => formula,
        None => read_formula()?,
    };

    let mut solver = Alphamatic::from_formula(&formula)?;
    if !config.quiet {
        solver.config().log_steps = true;
        solver.config().log_elapsed = config.log_elapsed;
    }
    solver.config().parallel = config.parallel;
    solver.config().limit = config.limit;

    let solutions = solver.solve();
    if config.letters {
        print!("{}", solutions.tables_for_terminal());
    } else {
        print!("{}", solutions);
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = argh::from_env::<Config>();
    alphamatic::logging::init_logger(config.quiet);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[test]
fn test_cli_errors() {
    let err = CliError::from(BadInput::MissingOperator);
    assert_eq!(err.to_string(), "formula contains neither '+' nor '-' sign");

    let err = CliError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
    assert_eq!(err.to_string(), "reading formula: no input");
}
