use std::io::{self, BufWriter, Read};
use std::process::ExitCode;

use clap::Parser;

use plume::PlumeError;
use plume::cli::Cli;
use plume::config::FormatOptions;
use plume::stream::PrettyStream;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when plume exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    let options = match FormatOptions::from_cli(&cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("plume: {e}");
            return ExitCode::from(1);
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PlumeError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("plume: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(options: FormatOptions) -> Result<(), PlumeError> {
    let mut stream = PrettyStream::new(options);
    stream.attach(BufWriter::new(io::stdout().lock()))?;

    let mut stdin = io::stdin().lock();
    let mut buf = [0u8; 8192];
    loop {
        let n = stdin.read(&mut buf)?;
        if n == 0 {
            break;
        }
        stream.write(&buf[..n])?;
    }

    stream.end()
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `plume`, this causes the *upstream* writer (e.g. a
/// Node process) to receive a broken-pipe error when `plume` exits.
/// Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
