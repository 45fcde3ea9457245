use std::{fs, process::ExitCode, sync::Once};

use clap::Parser;
use rlite::{interpreter::evaluator::core::Context, repl::run_repl, run};
use serde::Serialize;

/// rlite runs scripts written in a small R-flavoured language and prints the
/// console transcript they produce.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rlite to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Starts an interactive session; CONTENTS is ignored.
    #[arg(short, long)]
    repl: bool,

    /// Prints the transcript as a JSON object.
    #[arg(short, long)]
    json: bool,

    contents: Option<String>,
}

/// Transcript as printed by `--json`.
#[derive(Serialize)]
struct JsonReport {
    output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error:  Option<String>,
}

static TRACING_INIT: Once = Once::new();

/// Installs a `RUST_LOG`-filtered subscriber writing to stderr.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    if std::env::var("RUST_LOG").is_ok() {
                        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                                       .with_target(true))
                                                      .with(EnvFilter::from_default_env())
                                                      .init();
                    }
                });
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    if args.repl {
        return match run_repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let contents = args.contents.unwrap_or_default();
    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                let message =
                    format!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return report(args.json, Err(message));
            },
        }
    } else {
        contents
    };

    let mut context = Context::new();
    let result = run(&mut context, &script).map(|t| t.output)
                                           .map_err(|e| e.to_string());
    report(args.json, result)
}

/// Prints the outcome of a run and picks the exit status.
fn report(json: bool, result: Result<Vec<String>, String>) -> ExitCode {
    let status = if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE };

    if json {
        let report = match result {
            Ok(lines) => JsonReport { output: lines.join("\n"),
                                      error:  None, },
            Err(e) => JsonReport { output: String::new(),
                                   error:  Some(e), },
        };
        match serde_json::to_string(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        match result {
            Ok(lines) => lines.iter().for_each(|l| println!("{l}")),
            Err(e) => eprintln!("{e}"),
        }
    }

    status
}
