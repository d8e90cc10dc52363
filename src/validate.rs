// Shape checks on the two user-supplied locations: the signature server
// URL and the local signature file.

use std::path::Path;

use crate::error::{Result, UploadError};
use crate::payload::PathComponents;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Check that `url` is `http://` or `https://` followed by dot-separated
/// hostname labels made only of ASCII alphanumerics and hyphens.
///
/// A URL without `://` is malformed. A bad scheme or label is reported
/// as an invalid path, matching the exit code users already script
/// against.
pub fn repo_url(url: &str) -> Result<()> {
    let Some((scheme, host)) = url.split_once("://") else {
        return Err(UploadError::MalformedArgument(
            "URL format is malformed.".into(),
        ));
    };

    let scheme_is_valid = ALLOWED_SCHEMES.contains(&scheme);
    let host_is_valid = host.split('.').all(is_host_label);

    if scheme_is_valid && host_is_valid {
        Ok(())
    } else {
        Err(UploadError::InvalidPath(
            "Unsupported Protocol or Invalid Signature Server Hostname.".into(),
        ))
    }
}

fn is_host_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Check that `path` is an existing regular file laid out as
/// `.../<repo>/<layer>/<file>` and return its trailing components.
pub fn sig_path(path: &Path) -> Result<PathComponents> {
    if !path.is_file() {
        return Err(UploadError::InvalidPath("Signature path is invalid.".into()));
    }
    PathComponents::from_sig_path(path)
}
