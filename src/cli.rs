use std::path::PathBuf;

use clap::Parser;

/// Default endpoint of the in-cluster signature-ingest service.
pub const DEFAULT_REPO_URL: &str = "http://signature.apps.kubernetes.local";

/// Raw command line flags. Nothing is checked here beyond what clap
/// needs to parse; see [`crate::options::UploadOptions`] for validation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sigupload",
    about = "Upload a container image signature to a signature server or a Nexus3 RAW repository",
    version
)]
pub struct Cli {
    /// Signature server API endpoint
    #[arg(
        short = 'r',
        long = "repo_url",
        visible_alias = "repo-url",
        value_name = "URL",
        env = "SIGUPLOAD_REPO_URL",
        default_value = DEFAULT_REPO_URL
    )]
    pub repo_url: String,

    /// The *absolute* path to the signature-1 file in the local sigstore
    #[arg(short = 'a', long = "absolute-path", value_name = "FILE")]
    pub sig_path: Option<PathBuf>,

    /// Disable TLS certificate verification
    #[arg(long = "no-verify")]
    pub no_verify: bool,

    /// Upload to a Nexus3 RAW repository instead
    #[arg(long)]
    pub nexus: bool,

    /// Username for HTTP basic authentication (Nexus only)
    #[arg(short = 'u', long, env = "SIGUPLOAD_USERNAME")]
    pub username: Option<String>,

    /// Password for HTTP basic authentication (Nexus only)
    #[arg(short = 'p', long, env = "SIGUPLOAD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// RAW repository name on Nexus to upload to (Nexus only)
    #[arg(short = 's', long = "sigstore-name", env = "SIGUPLOAD_SIGSTORE_NAME")]
    pub sigstore_name: Option<String>,

    /// Logging filter (overridden by SIGUPLOAD_LOG)
    #[arg(long = "log", default_value = "info")]
    pub verbosity: String,
}

impl Cli {
    /// Resolve the logging filter to use for subscriber initialisation.
    pub fn env_filter(&self) -> String {
        std::env::var("SIGUPLOAD_LOG").unwrap_or_else(|_| self.verbosity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_only_path_given() {
        let cli = Cli::try_parse_from(["sigupload", "-a", "/s/repo/layer/signature-1"]).unwrap();
        assert_eq!(cli.sig_path, Some(PathBuf::from("/s/repo/layer/signature-1")));
        assert!(!cli.no_verify);
        assert!(!cli.nexus);
        assert_eq!(cli.verbosity, "info");
    }

    #[test]
    fn absent_and_empty_options_differ() {
        let cli = Cli::try_parse_from(["sigupload", "--nexus", "-s", ""]).unwrap();
        assert_eq!(cli.sigstore_name.as_deref(), Some(""));
        assert!(cli.sig_path.is_none());
    }

    #[test]
    fn long_flags_parse() {
        let cli = Cli::try_parse_from([
            "sigupload",
            "--repo_url",
            "https://nexus.example.com",
            "--absolute-path",
            "/s/repo/layer/signature-1",
            "--no-verify",
            "--nexus",
            "--username",
            "deployer",
            "--password",
            "hunter2",
            "--sigstore-name",
            "raw-sigs",
        ])
        .unwrap();
        assert_eq!(cli.repo_url, "https://nexus.example.com");
        assert!(cli.no_verify);
        assert!(cli.nexus);
        assert_eq!(cli.username.as_deref(), Some("deployer"));
        assert_eq!(cli.password.as_deref(), Some("hunter2"));
        assert_eq!(cli.sigstore_name.as_deref(), Some("raw-sigs"));
    }

    #[test]
    fn dashed_repo_url_alias_is_accepted() {
        let cli = Cli::try_parse_from(["sigupload", "--repo-url", "https://a.b"]).unwrap();
        assert_eq!(cli.repo_url, "https://a.b");
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["sigupload", "--bogus"]).is_err());
    }
}
