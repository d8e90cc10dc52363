// Terminal output: human readable status lines on stdout and a spinner
// on stderr while the request is in flight. Nothing here is a stable
// machine interface.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::UploadReport;
use crate::payload::UploadRequest;

/// Print what is about to be sent and where.
pub fn announce(request: &UploadRequest) {
    match request {
        UploadRequest::Post { url, payload } => {
            println!("UPLOADING TO NGINX");
            let body = serde_json::to_string(payload).unwrap_or_default();
            println!("POST to {} [PAYLOAD {}]", url, body);
        }
        UploadRequest::Put { url, .. } => {
            println!("NEXUS3: Uploading to: {}", url);
        }
    }
}

/// Print the response status of a finished upload.
pub fn report(report: &UploadReport) {
    println!("RESULT STATUS CODE: [{}]", report.status.as_u16());
}

/// Run `f` while a spinner with `message` ticks on stderr. The spinner is
/// cleared before returning so it never interleaves with stdout lines.
pub fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let out = f();
    spinner.finish_and_clear();
    out
}
