//! Blocking HTTP plumbing shared by the upstream clients.

use reqwest::blocking::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{TangentError, Upstream};

/// Sends `request` and decodes a successful JSON body into `T`.
///
/// Transport failures and non-success statuses map to the upstream's failure
/// kind; undecodable bodies map to [`TangentError::MalformedUpstreamPayload`].
/// URLs are stripped from transport errors so credentials in query strings
/// never reach messages or logs.
pub(crate) fn fetch_json<T>(request: RequestBuilder, upstream: Upstream) -> Result<T, TangentError>
where
    T: DeserializeOwned,
{
    let response = request
        .send()
        .map_err(|err| transport_error(upstream, err))?;
    let status = response.status();
    let body = response
        .text()
        .map_err(|err| transport_error(upstream, err))?;

    if !status.is_success() {
        let detail = error_detail(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });
        tracing::debug!(%upstream, status = status.as_u16(), %detail, "upstream returned error status");
        return Err(TangentError::upstream(
            upstream,
            format!("HTTP {}: {detail}", status.as_u16()),
            Some(status.as_u16()),
        ));
    }

    serde_json::from_str(&body).map_err(|err| TangentError::MalformedUpstreamPayload {
        upstream,
        message: err.to_string(),
    })
}

fn transport_error(upstream: Upstream, err: reqwest::Error) -> TangentError {
    let err = err.without_url();
    let message = if err.is_timeout() {
        format!("request timed out: {err}")
    } else {
        err.to_string()
    };
    tracing::debug!(%upstream, %message, "upstream request failed");
    TangentError::upstream(upstream, message, err.status().map(|status| status.as_u16()))
}

/// Pulls a human-readable message out of an upstream error body.
///
/// Understands `{"message": ...}` and `{"error": {"description": ...}}`.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error").and_then(|error| error.get("description")))
        .and_then(Value::as_str)
        .map(str::to_string)
}
