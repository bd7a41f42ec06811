pub mod executor;
pub mod query;
pub mod storage;

use clap::Parser;
use executor::{Executor, Outcome, Report};
use log::LevelFilter;
use query::InputErr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use storage::TableStore;

/// Line-oriented front-end for a minimal relational store
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read commands from this file instead of the terminal
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Do not print the schema of newly created tables
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long, default_value = "sqlight> ")]
    prompt: String,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut exec = Executor::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &args.script {
        Some(path) => match File::open(path) {
            Ok(file) => run_script(&mut exec, BufReader::new(file), &mut out, args.quiet),
            Err(e) => {
                eprintln!("Cannot open script '{}': {}", path.display(), e);
                return;
            }
        },
        None => {
            let stdin = io::stdin();
            run_repl(&mut exec, stdin.lock(), &mut out, &args)
        }
    };
    if let Err(e) = result {
        eprintln!("Session ended with an I/O error: {}", e);
    }
}

fn run_repl(
    exec: &mut Executor,
    mut input: impl BufRead,
    out: &mut impl Write,
    args: &Args,
) -> io::Result<()> {
    writeln!(out, "sqlight (type '.exit' or '.quit' to stop)")?;
    loop {
        write!(out, "\n{}", args.prompt)?;
        out.flush()?;
        let line = match read_command(&mut input) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(InputErr::Empty) => {
                writeln!(out, "{}", InputErr::Empty)?;
                continue;
            }
            // the offending line is consumed, the next read starts fresh
            Err(InputErr::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                writeln!(out, "{}", InputErr::Io(e))?;
                continue;
            }
            Err(InputErr::Io(e)) => return Err(e),
        };
        match line.trim() {
            ".exit" | ".quit" => break,
            ".tables" => {
                for name in exec.registry().names() {
                    writeln!(out, "{}", name)?;
                }
            }
            _ => {
                let outcome = exec.process(&line);
                render(out, exec, &outcome, args.quiet)?;
            }
        }
    }
    Ok(())
}

fn run_script(
    exec: &mut Executor,
    mut input: impl BufRead,
    out: &mut impl Write,
    quiet: bool,
) -> io::Result<()> {
    loop {
        match read_command(&mut input) {
            Ok(Some(line)) => {
                let outcome = exec.process(&line);
                render(out, exec, &outcome, quiet)?;
            }
            Ok(None) => break,
            Err(InputErr::Empty) => log::trace!("skipping blank line"),
            Err(InputErr::Io(e)) => return Err(e),
        }
    }
    Ok(())
}

/// Reads one command line. `Ok(None)` marks the end of input.
fn read_command(input: &mut impl BufRead) -> Result<Option<String>, InputErr> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.trim().is_empty() {
        return Err(InputErr::Empty);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn render(
    out: &mut impl Write,
    exec: &Executor,
    outcome: &Outcome,
    quiet: bool,
) -> io::Result<()> {
    match outcome {
        Outcome::Unrecognized => Ok(()),
        Outcome::FormatError(err) => writeln!(out, "\n{}", err),
        Outcome::Handled { result: Err(err), .. } => writeln!(out, "{}", err),
        Outcome::Handled {
            result: Ok(report),
            ..
        } => match report {
            Report::Deferred(_) => Ok(()),
            Report::TableCreated {
                name,
                if_not_exists,
            } => {
                if *if_not_exists {
                    writeln!(out, "IF NOT EXISTS used.")?;
                }
                if !quiet && let Some(table) = exec.tables().get(name) {
                    writeln!(out, "{}", table)?;
                }
                writeln!(out, "{}", report)
            }
            _ => writeln!(out, "{}", report),
        },
    }
}
