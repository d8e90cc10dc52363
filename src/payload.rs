// Payload construction: everything derived from the signature path and
// its content before anything touches the network.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, UploadError};
use crate::options::{Credentials, UploadMode, UploadOptions};

/// File name every signature gets inside a Nexus RAW repository.
pub const NEXUS_SIGNATURE_NAME: &str = "signature-1";

/// The last three `/`-separated segments of a sigstore path, e.g.
/// `/var/lib/sigstore/<repo_name>/<layer_id>/<filename>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathComponents {
    pub repo_name: String,
    pub layer_id: String,
    pub filename: String,
}

impl PathComponents {
    /// Split `path` on `/` and keep the trailing three segments.
    ///
    /// Paths with fewer than three segments, or with an empty repository
    /// or layer segment, are rejected.
    pub fn from_sig_path(path: &Path) -> Result<Self> {
        let raw = path.to_str().ok_or_else(|| {
            UploadError::InvalidPath(format!(
                "Signature path is not valid UTF-8: {}",
                path.display()
            ))
        })?;

        let segments: Vec<&str> = raw.split('/').collect();
        let [.., repo_name, layer_id, filename] = segments.as_slice() else {
            return Err(UploadError::InvalidPath(format!(
                "Signature path must look like <repository>/<layer>/<file>, got {raw}"
            )));
        };
        if repo_name.is_empty() || layer_id.is_empty() {
            return Err(UploadError::InvalidPath(format!(
                "Signature path has an empty repository or layer segment: {raw}"
            )));
        }

        Ok(PathComponents {
            repo_name: repo_name.to_string(),
            layer_id: layer_id.to_string(),
            filename: filename.to_string(),
        })
    }
}

/// JSON body accepted by the signature-ingest service. All fields are
/// standard base64.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadPayload {
    pub repo_name: String,
    pub layer_id: String,
    pub signature_data: String,
}

impl UploadPayload {
    pub fn new(components: &PathComponents, signature: &[u8]) -> Self {
        UploadPayload {
            repo_name: STANDARD.encode(components.repo_name.as_bytes()),
            layer_id: STANDARD.encode(components.layer_id.as_bytes()),
            signature_data: STANDARD.encode(signature),
        }
    }
}

/// `{repo_url}/repository/{sigstore}/{repo}/{layer}/signature-1`
pub fn nexus_target_url(repo_url: &str, sigstore_name: &str, components: &PathComponents) -> String {
    format!(
        "{}/repository/{}/{}/{}/{}",
        repo_url, sigstore_name, components.repo_name, components.layer_id, NEXUS_SIGNATURE_NAME
    )
}

/// A fully prepared request, ready to hand to the HTTP client.
#[derive(Debug, Clone)]
pub enum UploadRequest {
    /// JSON payload POSTed to the signature-ingest service.
    Post { url: String, payload: UploadPayload },
    /// Raw signature bytes PUT into a Nexus RAW repository.
    Put {
        url: String,
        body: Vec<u8>,
        credentials: Option<Credentials>,
    },
}

impl UploadRequest {
    /// Read the signature file and shape the request for the selected mode.
    pub fn from_options(options: &UploadOptions) -> Result<Self> {
        let signature = std::fs::read(&options.sig_path).map_err(|err| {
            UploadError::InvalidPath(format!(
                "Unable to read signature file {}: {err}",
                options.sig_path.display()
            ))
        })?;
        debug!(
            repo_name = %options.components.repo_name,
            layer_id = %options.components.layer_id,
            bytes = signature.len(),
            "read signature"
        );

        let request = match &options.mode {
            UploadMode::Direct => UploadRequest::Post {
                url: options.repo_url.clone(),
                payload: UploadPayload::new(&options.components, &signature),
            },
            UploadMode::Nexus {
                sigstore_name,
                credentials,
            } => UploadRequest::Put {
                url: nexus_target_url(&options.repo_url, sigstore_name, &options.components),
                body: signature,
                credentials: credentials.clone(),
            },
        };
        Ok(request)
    }

    pub fn url(&self) -> &str {
        match self {
            UploadRequest::Post { url, .. } | UploadRequest::Put { url, .. } => url,
        }
    }
}
