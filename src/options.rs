// Typed, validated configuration for one upload run, built once from the
// parsed command line and never mutated afterwards.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::cli::Cli;
use crate::error::{Result, UploadError};
use crate::payload::PathComponents;
use crate::validate;

/// HTTP basic authentication pair. Only built when both halves exist.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where the signature goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadMode {
    /// POST a JSON payload to the signature-ingest service.
    Direct,
    /// PUT the raw file into a Nexus3 RAW repository.
    Nexus {
        sigstore_name: String,
        credentials: Option<Credentials>,
    },
}

#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub repo_url: String,
    pub sig_path: PathBuf,
    pub components: PathComponents,
    pub ssl_verify: bool,
    pub mode: UploadMode,
}

impl TryFrom<Cli> for UploadOptions {
    type Error = UploadError;

    /// Validate the parsed flags. Checks run in a fixed order and the
    /// first failure is returned: signature path presence, server URL,
    /// signature file, then Nexus settings.
    fn try_from(cli: Cli) -> Result<Self> {
        let sig_path = cli.sig_path.ok_or_else(|| {
            UploadError::MissingArgument("Missing mandatory option: ABSOLUTE SIGNATURE PATH.".into())
        })?;

        validate::repo_url(&cli.repo_url)?;
        let components = validate::sig_path(&sig_path)?;

        let mode = if cli.nexus {
            let sigstore_name = cli.sigstore_name.ok_or_else(|| {
                UploadError::MissingArgument(
                    "Nexus upload requested, but no sigstore name has been specified.".into(),
                )
            })?;
            let credentials = match (cli.username, cli.password) {
                (Some(username), Some(password)) => Some(Credentials { username, password }),
                (None, None) => None,
                (Some(_), None) => {
                    warn!("username given without password, uploading unauthenticated");
                    None
                }
                (None, Some(_)) => {
                    warn!("password given without username, uploading unauthenticated");
                    None
                }
            };
            UploadMode::Nexus {
                sigstore_name,
                credentials,
            }
        } else {
            if cli.sigstore_name.is_some() || cli.username.is_some() || cli.password.is_some() {
                debug!("Nexus options ignored without --nexus");
            }
            UploadMode::Direct
        };

        Ok(UploadOptions {
            repo_url: cli.repo_url,
            sig_path,
            components,
            ssl_verify: !cli.no_verify,
            mode,
        })
    }
}
