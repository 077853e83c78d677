//! Remote validation over plain HTTP GET.
//!
//! The configuration wizard validates every answer against the live service
//! with a single blocking GET. This module reduces a response to the two
//! things the wizard inspects: the status code and the parsed JSON body.
//!
//! The check is behind the [`RemoteCheck`] trait so the wizard can run
//! against canned responses in tests; [`HttpChecker`] is the production
//! implementation.

use crate::core::error::{GitIssuesError, Result};
use serde_json::Value;

/// A remote response reduced to status code and parsed body.
///
/// Bodies that are missing or not valid JSON parse to `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: Value,
}

impl RemoteResponse {
    /// Whether the service accepted the request
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Single-operation seam over the HTTP transport.
pub trait RemoteCheck {
    /// Issue one GET against `url` with the given headers.
    ///
    /// An error status from the service is still a response; only
    /// transport-level failures (connection refused, malformed response)
    /// return `Err`.
    fn check(&self, url: &str, headers: &[(&str, &str)]) -> Result<RemoteResponse>;
}

/// Blocking HTTP implementation of [`RemoteCheck`]
pub struct HttpChecker;

impl RemoteCheck for HttpChecker {
    fn check(&self, url: &str, headers: &[(&str, &str)]) -> Result<RemoteResponse> {
        log::debug!("Checking remote: GET {url}");

        let mut request = ureq::get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        match request.call() {
            Ok(mut response) => {
                let status = response.status().as_u16();
                let text = response.body_mut().read_to_string().unwrap_or_default();
                let body = serde_json::from_str(&text).unwrap_or(Value::Null);
                Ok(RemoteResponse { status, body })
            }
            Err(ureq::Error::StatusCode(code)) => {
                log::debug!("Remote answered with status {code}");
                Ok(RemoteResponse {
                    status: code,
                    body: Value::Null,
                })
            }
            Err(e) => {
                log::debug!("Remote check failed: {e}");
                Err(GitIssuesError::request_failed(url, e))
            }
        }
    }
}
