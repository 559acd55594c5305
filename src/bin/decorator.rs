use design_patterns::logging::{self, LogSettings};
use design_patterns::{console, decorator, Result};
use std::io::{self, Write};
use std::process::ExitCode;

fn run() -> Result<()> {
    logging::init(&LogSettings::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    decorator::demo(&mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", console::error_report(&err));
            ExitCode::FAILURE
        }
    }
}
