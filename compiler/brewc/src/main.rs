//! Brew CLI.

use std::process::ExitCode;

use brewc::{init_tracing, run, write_usage, DriverConfig, DriverError};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match DriverConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            if matches!(err, DriverError::UnknownCommand(_)) {
                eprintln!();
                let _ = write_usage(&mut std::io::stderr());
            }
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match run(&config, &mut stdout) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
