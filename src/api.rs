// HTTP client module: a small blocking client that delivers one prepared
// signature upload and reports the response status. Status codes are
// not interpreted; any completed exchange counts as success.

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use tracing::info;

use crate::error::Result;
use crate::payload::{UploadPayload, UploadRequest};
use crate::options::Credentials;

/// Outcome of a completed upload.
#[derive(Debug, Clone)]
pub struct UploadReport {
    pub method: Method,
    pub url: String,
    pub status: StatusCode,
}

/// Holds a reqwest blocking client configured for the run's TLS policy.
#[derive(Clone)]
pub struct SignatureClient {
    client: Client,
}

impl SignatureClient {
    /// Build a client. With `ssl_verify` false, invalid or self-signed
    /// server certificates are accepted.
    pub fn new(ssl_verify: bool) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!ssl_verify)
            .build()?;
        Ok(SignatureClient { client })
    }

    /// Send a prepared request, dispatching on its mode.
    pub fn send(&self, request: UploadRequest) -> Result<UploadReport> {
        match request {
            UploadRequest::Post { url, payload } => {
                let status = self.post_payload(&url, &payload)?;
                Ok(UploadReport {
                    method: Method::POST,
                    url,
                    status,
                })
            }
            UploadRequest::Put {
                url,
                body,
                credentials,
            } => {
                let status = self.put_signature(&url, body, credentials.as_ref())?;
                Ok(UploadReport {
                    method: Method::PUT,
                    url,
                    status,
                })
            }
        }
    }

    /// POST the JSON payload to the signature-ingest service.
    pub fn post_payload(&self, url: &str, payload: &UploadPayload) -> Result<StatusCode> {
        info!(url, "posting signature payload");
        let res = self.client.post(url).json(payload).send()?;
        Ok(res.status())
    }

    /// PUT raw signature bytes, with basic auth when credentials are given.
    pub fn put_signature(
        &self,
        url: &str,
        body: Vec<u8>,
        credentials: Option<&Credentials>,
    ) -> Result<StatusCode> {
        info!(url, authenticated = credentials.is_some(), "putting signature");
        let mut req = self
            .client
            .put(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"))
            .body(body);
        if let Some(creds) = credentials {
            req = req.basic_auth(&creds.username, Some(&creds.password));
        }
        let res = req.send()?;
        Ok(res.status())
    }
}
