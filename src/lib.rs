// Library root
// -----------
// This crate exposes the uploader as a library; the binary (`main.rs`)
// only parses flags, sets up logging and maps errors to exit codes.
//
// Module responsibilities:
// - `cli`: clap flag definitions.
// - `validate` / `options`: checks on the flags, producing `UploadOptions`.
// - `payload`: path components, base64 JSON payload, Nexus target URL.
// - `api`: the blocking HTTP client that sends the request.
// - `ui`: status lines and the progress spinner.
// - `error`: error kinds and their exit codes.
pub mod api;
pub mod cli;
pub mod error;
pub mod options;
pub mod payload;
pub mod ui;
pub mod validate;

use crate::api::{SignatureClient, UploadReport};
use crate::cli::Cli;
use crate::error::Result;
use crate::options::UploadOptions;
use crate::payload::UploadRequest;

/// One full run: validate, build the request, send it, print the result.
pub fn run(cli: Cli) -> Result<UploadReport> {
    let options = UploadOptions::try_from(cli)?;
    let client = SignatureClient::new(options.ssl_verify)?;
    let request = UploadRequest::from_options(&options)?;

    ui::announce(&request);
    let report = ui::with_spinner("Uploading...", || client.send(request))?;
    ui::report(&report);
    Ok(report)
}
