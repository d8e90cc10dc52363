// Entrypoint for the CLI application.
// - Keeps `main` small: parse flags, set up logging, hand off to `run`.
// - Every failure ends up as a kind-specific exit code.

use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::Parser;
use sigupload::{cli::Cli, error::UploadError};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = cli.env_filter();
    let env_filter = EnvFilter::try_new(&filter)
        .map_err(|err| UploadError::MalformedArgument(format!("Invalid log filter `{filter}`: {err}")))?;

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("Failed to install log subscriber")
}

fn exit_code(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<UploadError>()
        .map_or(ExitCode::FAILURE, |err| ExitCode::from(err.exit_code()))
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(UploadError::MalformedArgument(err.to_string()).exit_code());
        }
    };

    if let Err(err) = init_logging(&cli) {
        eprintln!("{err:#}");
        return exit_code(&err);
    }

    match sigupload::run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "upload failed");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
