use std::{
    fs, io,
    io::{BufRead, IsTerminal},
    process::ExitCode,
};

use calc::{
    evaluate,
    util::format::{DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS, format_significant},
};
use clap::Parser;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::Layer,
    prelude::*,
};

/// calc evaluates an arithmetic expression and prints the result.
///
/// Words are joined with single spaces, so `calc 3 x 4` and `calc "3 * 4"` are
/// the same expression. Without any words, one line is read from standard
/// input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the expression from a file instead of the command line.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<String>,

    /// Number of significant digits in the printed result.
    #[arg(short, long, default_value_t = DEFAULT_SIGNIFICANT_DIGITS,
          value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_SIGNIFICANT_DIGITS)))]
    precision: u8,

    /// Logs evaluation steps to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, possibly split over several words.
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry().with(Layer::new().with_ansi(io::stderr().is_terminal())
                                                    .with_target(false)
                                                    .with_writer(io::stderr)
                                                    .with_filter(Targets::new().with_default(LevelFilter::WARN)
                                                                               .with_target("calc", level)))
                                  .init();
}

fn read_input(args: &Args) -> io::Result<String> {
    if let Some(path) = &args.file {
        return fs::read_to_string(path);
    }
    if !args.expression.is_empty() {
        return Ok(args.expression.join(" "));
    }

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = match read_input(&args) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to read the expression: {e}");
            return ExitCode::FAILURE;
        },
    };

    match evaluate(&input) {
        Ok(value) => {
            println!("= {}", format_significant(value, usize::from(args.precision)));
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{input}");
            if let Some(pos) = e.position() {
                let column = input[..pos].chars().count();
                eprintln!("{}^", " ".repeat(column));
            }
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
