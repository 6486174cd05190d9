mod debug_report;

use mine_escape::{EscapeError, Options, escape_verbose_with, load_file};
use std::io::{self, IsTerminal};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), EscapeError> {
    let grid = load_file(&config.map_path)?;
    let options = Options { step_budget: config.max_steps, trace: false };
    let details = escape_verbose_with(grid, &options)?;

    println!("{}", details.outcome);
    if config.verbose {
        debug_report::print_run(&config.map_path, &details, config.color);
    }
    Ok(())
}

struct CliConfig {
    map_path: String,
    max_steps: Option<u64>,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut map_path: Option<String> = None;
    let mut max_steps: Option<u64> = None;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("mine-escape {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--max-steps" => {
                let value = args.next().ok_or_else(|| "error: --max-steps expects a value".to_string())?;
                max_steps = Some(parse_steps(&value)?);
            }
            _ if arg.starts_with("--max-steps=") => {
                max_steps = Some(parse_steps(arg.trim_start_matches("--max-steps="))?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if map_path.is_some() {
                    return Err("error: map file provided multiple times".to_string());
                }
                map_path = Some(arg);
            }
        }
    }

    let map_path = map_path.ok_or_else(|| format!("Map file not given in the arguments.\n\n{}", help_text()))?;

    Ok(CliConfig { map_path, max_steps, verbose, color })
}

fn parse_steps(value: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| format!("error: invalid --max-steps '{value}' (expected a positive integer)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "mine-escape {version}

Walks a mine map from its start cell to an exit, collecting gold and keys.

Usage:
  mine-escape [OPTIONS] <map-file>

Options:
  -v, --verbose              Print a run report (ledger, metrics, path overlay).
  --max-steps <n>            Abort the walk after <n> steps.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  MINE_ESCAPE_DEBUG=1        Trace every step to stderr.

Exit codes:
  0  Walk completed (a path or 'No solution found').
  1  Map could not be loaded, or the walk was aborted.
  2  Invalid arguments or missing map file.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
