//! Usage: Reachability check run before the webview is pointed at the daemon UI.

use std::time::{Duration, Instant};

/// Applies to the connect phase and to the whole request.
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

fn parse_target(url: &str) -> Result<reqwest::Url, String> {
    let url = url.trim();
    if url.is_empty() {
        return Err("SEC_INVALID_INPUT: daemon url is required".to_string());
    }
    reqwest::Url::parse(url)
        .map_err(|e| format!("SEC_INVALID_INPUT: invalid daemon url={url}: {e}"))
}

/// Resolves with the round-trip time once the daemon answers with any HTTP status.
///
/// A failed HEAD is retried once as GET, since some embedded servers only route GET.
/// Connection, DNS, TLS and timeout errors are load failures.
pub(crate) async fn check_reachable(url: &str) -> Result<Duration, String> {
    let target = parse_target(url)?;
    let client = reqwest::Client::builder()
        .connect_timeout(CHECK_TIMEOUT)
        .timeout(CHECK_TIMEOUT)
        .build()
        .map_err(|e| format!("HTTP_CLIENT_ERROR: failed to build http client: {e}"))?;

    let started = Instant::now();
    if let Err(head_err) = client.head(target.clone()).send().await {
        tracing::debug!(url = %target, "HEAD failed, retrying as GET: {}", head_err);
        client
            .get(target)
            .send()
            .await
            .map_err(|e| format!("UNREACHABLE: {e}"))?;
    }
    Ok(started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_status(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0_u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response =
                    format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn blank_url_is_invalid_input() {
        let err = check_reachable("  ").await.unwrap_err();
        assert_eq!(err, "SEC_INVALID_INPUT: daemon url is required");
    }

    #[tokio::test]
    async fn url_without_scheme_is_invalid_input() {
        let err = check_reachable("localhost:11987").await.unwrap_err();
        assert!(err.starts_with("SEC_INVALID_INPUT: invalid daemon url="), "{err}");
    }

    #[tokio::test]
    async fn closed_port_is_a_load_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let err = check_reachable(&format!("http://{addr}")).await.unwrap_err();
        assert!(err.starts_with("UNREACHABLE:"), "{err}");
    }

    #[tokio::test]
    async fn running_daemon_is_reachable() {
        let url = serve_status("HTTP/1.1 200 OK").await;
        let result = check_reachable(&url).await;
        assert!(result.is_ok(), "{result:?}");
    }

    #[tokio::test]
    async fn error_status_still_counts_as_reachable() {
        let url = serve_status("HTTP/1.1 404 Not Found").await;
        let result = check_reachable(&url).await;
        assert!(result.is_ok(), "{result:?}");
    }
}
