//! Stream Relay Handler
//!
//! Range-aware pass-through between a client audio player and an
//! upstream HTTP(S) audio resource. Hides the upstream URL from the
//! browser and keeps playback CORS-free.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderName},
    response::Response,
};
use tracing::debug;

use crate::api::AppState;
use crate::error::{RelayError, Result};
use crate::models::StreamParams;

/// Upstream response headers copied through verbatim when present.
const RELAYED_HEADERS: [HeaderName; 3] = [
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::CONTENT_RANGE,
];

/// Handler for GET /stream?url=
///
/// Forwards the inbound `Range` header unchanged so the upstream serves
/// the requested byte slice (206) instead of the whole file, then
/// relays the upstream status, selected headers, and body. The body is
/// forwarded as a byte stream; the full payload is never buffered.
///
/// Each request is independent: nothing is cached and no state survives
/// the response. A client disconnect drops the body stream, which
/// cancels the upstream transfer.
pub async fn stream_handler(
    State(state): State<AppState>,
    Query(params): Query<StreamParams>,
    headers: HeaderMap,
) -> Result<Response> {
    let raw_url = params.url.as_deref().ok_or_else(|| {
        RelayError::InvalidRequest("Missing required query parameter: url".to_string())
    })?;

    // Scheme check comes before any network call; file:, data: and
    // friends must never reach the client.
    let target = validate_stream_url(raw_url)?;

    let mut request = state.http.get(target);
    if let Some(range) = headers.get(header::RANGE) {
        request = request.header(header::RANGE, range.clone());
    }

    let upstream = request
        .send()
        .await
        .map_err(|err| RelayError::UpstreamUnavailable {
            status: None,
            message: format!("Upstream fetch failed: {err}"),
        })?;

    let status = upstream.status();
    if !status.is_success() {
        debug!(%status, url = %raw_url, "upstream rejected stream request");
        return Err(RelayError::upstream_status(status));
    }

    // Range-dependent bodies must not be cached by intermediaries.
    let mut response = Response::builder()
        .status(status)
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, "no-cache, must-revalidate");

    for name in RELAYED_HEADERS {
        if let Some(value) = upstream.headers().get(&name) {
            response = response.header(name, value.clone());
        }
    }

    response
        .body(Body::from_stream(upstream.bytes_stream()))
        .map_err(|err| RelayError::Internal(err.to_string()))
}

// == URL Validation ==
/// Parses the target URL and restricts it to http/https.
fn validate_stream_url(raw: &str) -> Result<reqwest::Url> {
    let url = reqwest::Url::parse(raw)
        .map_err(|_| RelayError::InvalidRequest(format!("Malformed stream URL: {raw}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(RelayError::InvalidRequest(format!(
            "Unsupported stream URL scheme: {scheme}"
        ))),
    }
}
