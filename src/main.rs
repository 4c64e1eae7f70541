use std::env;
use std::io::{self, BufRead, Write};
use std::process::exit;

use loxscan::common::{
    EXIT_DATA_ERROR, EXIT_IO_ERROR, EXIT_USAGE, LOG_FILTER_DEFAULT, REPL_PROMPT,
};
use loxscan::error::{DriverError, DriverResult};
use loxscan::ConsoleReporter;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Scans `source` and prints one line per token. Returns whether the scan was
/// clean.
fn run(source: &str, reporter: &mut ConsoleReporter, out: &mut impl Write) -> io::Result<bool> {
    let tokens = loxscan::scan(source, reporter);
    for token in &tokens {
        writeln!(out, "{token}")?;
    }
    Ok(!reporter.had_error())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(LOG_FILTER_DEFAULT)),
        )
        .with_writer(io::stderr)
        .init();

    let args = env::args().collect::<Vec<String>>();
    let result = match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => Err(DriverError::Usage),
    };

    match result {
        Ok(true) => {}
        Ok(false) => exit(EXIT_DATA_ERROR),
        Err(err) => {
            eprintln!("{err}");
            match err {
                DriverError::Usage => exit(EXIT_USAGE),
                DriverError::ReadFile { .. } | DriverError::Io(_) => exit(EXIT_IO_ERROR),
            }
        }
    }
}

fn repl() -> DriverResult<bool> {
    let mut reporter = ConsoleReporter::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut buf = String::new();
    loop {
        buf.clear();
        write!(stdout, "{REPL_PROMPT}")?;
        stdout.flush()?;
        if stdin.lock().read_line(&mut buf)? == 0 {
            writeln!(stdout)?;
            return Ok(true);
        }
        run(&buf, &mut reporter, &mut stdout)?;
        reporter.reset();
    }
}

fn run_file(path: &str) -> DriverResult<bool> {
    let source = std::fs::read_to_string(path).map_err(|source| DriverError::ReadFile {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path, bytes = source.len(), "read source file");
    let mut reporter = ConsoleReporter::new();
    let mut stdout = io::stdout().lock();
    Ok(run(&source, &mut reporter, &mut stdout)?)
}
