//! Wrapify cart transform runner

use std::{io, process::ExitCode};

use tracing::error;

use wrapify::{config::Config, host, observability::init_subscriber};

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            // Also covers --help and --version, which clap reports as errors.
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                if err.print().is_err() {
                    eprintln!("Configuration error: {err}");
                }
            }

            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match host::run(&config, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "cart transform failed");

            ExitCode::FAILURE
        }
    }
}
