// Error kinds for the uploader. Every variant is terminal: the binary
// prints the message and exits with the code returned by `exit_code`.

/// Errors raised while validating arguments or uploading a signature.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// A mandatory input was not supplied.
    #[error("{0}")]
    MissingArgument(String),

    /// The signature file or the server URL has an unusable shape.
    #[error("{0}")]
    InvalidPath(String),

    /// An argument could not be parsed at all.
    #[error("{0}")]
    MalformedArgument(String),

    /// The HTTP client could not be built or the request did not complete.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl UploadError {
    /// Process exit code associated with this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            UploadError::MissingArgument(_) => 1,
            UploadError::InvalidPath(_) => 2,
            UploadError::MalformedArgument(_) => 3,
            UploadError::Transport(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, UploadError>;
