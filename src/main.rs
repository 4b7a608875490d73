use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use lofy::{
    error::Error,
    interpreter::session::{Mode, Session},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// LoFy is a small interpreted scripting language with integers, floats,
/// strings, `if`, `while` and `print`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lofy to read CONTENTS as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the value of the last expression
    /// statement of a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Log debugging information to stderr. `LOFY_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// Source text to run. Starts the interactive prompt when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(contents) = args.contents else {
        repl();
        return ExitCode::SUCCESS;
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mode = if args.pipe_mode { Mode::Pipe } else { Mode::Script };
    let outcome = Session::stdout(mode).run(&script);
    report(&outcome.errors);

    if outcome.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LOFY_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Reads chunks from stdin and runs them until EOF or `exit`.
fn repl() {
    println!("LoFy Interpreter v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' to quit.");

    let mut session = Session::stdout(Mode::Repl);
    let mut lines = io::stdin().lock().lines();

    loop {
        let chunk = match read_chunk(&mut lines) {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        };
        if chunk.trim() == "exit" {
            break;
        }
        let outcome = session.run(&chunk);
        report(&outcome.errors);
    }
}

/// Reads one line, or a header line ending in `:` plus every following line
/// up to the first empty one. `Ok(None)` means end of input.
fn read_chunk(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Option<String>> {
    prompt(">>> ");
    let Some(first) = lines.next().transpose()? else {
        return Ok(None);
    };
    let opens_block = first.trim_end().ends_with(':');

    let mut chunk = first;
    chunk.push('\n');

    if opens_block {
        loop {
            prompt("... ");
            match lines.next().transpose()? {
                Some(line) if !line.trim().is_empty() => {
                    chunk.push_str(&line);
                    chunk.push('\n');
                },
                _ => break,
            }
        }
    }

    Ok(Some(chunk))
}

fn prompt(text: &str) {
    let mut stdout = io::stdout();
    if let Err(e) = write!(stdout, "{text}").and_then(|()| stdout.flush()) {
        warn!(%e, "failed to write prompt");
    }
}

fn report(errors: &[Error]) {
    for error in errors {
        eprintln!("{error}");
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::read_chunk;

    fn lines(input: Vec<io::Result<&str>>) -> impl Iterator<Item = io::Result<String>> {
        input.into_iter().map(|line| line.map(str::to_string))
    }

    #[test]
    fn reads_single_lines_and_blocks() {
        let mut input = lines(vec![Ok("x = 1"), Ok("while x:"), Ok("  x = 0"), Ok(""), Ok("exit")]);

        assert_eq!(read_chunk(&mut input).unwrap().as_deref(), Some("x = 1\n"));
        assert_eq!(read_chunk(&mut input).unwrap().as_deref(), Some("while x:\n  x = 0\n"));
        assert_eq!(read_chunk(&mut input).unwrap().as_deref(), Some("exit\n"));
        assert_eq!(read_chunk(&mut input).unwrap(), None);
    }

    #[test]
    fn read_failures_are_reported() {
        let invalid = || io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");

        let mut input = lines(vec![Err(invalid())]);
        assert_eq!(read_chunk(&mut input).unwrap_err().kind(), io::ErrorKind::InvalidData);

        let mut input = lines(vec![Ok("if 1:"), Err(invalid())]);
        assert!(read_chunk(&mut input).is_err());
    }
}
