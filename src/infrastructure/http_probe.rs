// SPDX-License-Identifier: MPL-2.0
//! Diagnostic source probe.
//!
//! Issues one GET against the media URL and reports only the transport
//! status code. The body is never read; dropping the response closes
//! the connection once the headers are in. Any failure to complete the
//! request (DNS, refused connection, timeout) yields `None`, and fault
//! classification then proceeds without transport refinement.

use std::time::Duration;

use url::Url;

/// How long the probe waits before giving up on the transport.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Probes `url` and returns the HTTP status code, or `None` when the
/// request could not complete at all.
pub async fn probe_source(url: &Url) -> Option<u16> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .ok()?;
    let response = client.get(url.clone()).send().await.ok()?;
    Some(response.status().as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_url;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(status_line: &'static str) -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!("{status_line}\r\ncontent-length: 0\r\n\r\n");
            let _ = socket.write_all(response.as_bytes()).await;
        });
        addr
    }

    #[tokio::test]
    async fn reports_the_status_of_a_reachable_source() {
        let addr = serve_once("HTTP/1.1 404 Not Found").await;
        let url = source_url::validate(&format!("http://{addr}/missing.mp4")).unwrap();

        assert_eq!(probe_source(&url).await, Some(404));
    }

    #[tokio::test]
    async fn forbidden_sources_report_their_status() {
        let addr = serve_once("HTTP/1.1 403 Forbidden").await;
        let url = source_url::validate(&format!("http://{addr}/locked.mp4")).unwrap();

        assert_eq!(probe_source(&url).await, Some(403));
    }

    #[tokio::test]
    async fn unreachable_sources_yield_no_status() {
        // Bind to grab a free port, then release it so the connection
        // is refused.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = source_url::validate(&format!("http://{addr}/clip.mp4")).unwrap();
        assert_eq!(probe_source(&url).await, None);
    }
}
