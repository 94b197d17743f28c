//! Tests for automation webhook status handling using a canned HTTP server.

use dossier_dialogue::AutomationWebhook;
use dossier_interface::ContextWebhook;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned HTTP response on an ephemeral port and return its address.
async fn one_shot_server(status_line: &'static str, body: &'static str) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Drain the request: headers, then the content-length body.
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(header_end) = find_header_end(&buf) {
                let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    addr
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[tokio::test]
async fn test_webhook_200_returns_parsed_json() {
    let addr = one_shot_server("200 OK", r#"{"top_comment": "interesting"}"#).await;
    let endpoint = format!("http://{}/api/multion_webhook", addr);

    let webhook = AutomationWebhook::new(
        "Friends",
        endpoint.clone(),
        "https://news.ycombinator.com/",
        "Find the top comment of the top post on Hackernews.",
    );

    let payload = webhook.fetch().await.unwrap();
    assert_eq!(payload, serde_json::json!({"top_comment": "interesting"}));
}

#[tokio::test]
async fn test_webhook_500_captured_as_error_payload() {
    let addr = one_shot_server("500 Internal Server Error", "").await;
    let endpoint = format!("http://{}/api/multion_webhook", addr);

    let webhook = AutomationWebhook::new(
        "Friends",
        endpoint.clone(),
        "https://news.ycombinator.com/",
        "Find the top comment of the top post on Hackernews.",
    );

    // Failure is data, not an Err.
    let payload = webhook.fetch().await.unwrap();
    let expected = format!("Failed to call webhook {}. Status code: 500", endpoint);
    assert_eq!(payload, serde_json::json!({"error": expected}));
}

#[tokio::test]
async fn test_webhook_non_200_success_statuses_also_captured() {
    // The original check is status == 200 exactly, so even 201 is "failure".
    let addr = one_shot_server("201 Created", "{}").await;
    let endpoint = format!("http://{}/api/multion_webhook", addr);

    let webhook = AutomationWebhook::new("Friends", endpoint.clone(), "https://example.com", "noop");

    let payload = webhook.fetch().await.unwrap();
    let expected = format!("Failed to call webhook {}. Status code: 201", endpoint);
    assert_eq!(payload, serde_json::json!({"error": expected}));
}

#[tokio::test]
async fn test_webhook_connection_refused_is_fatal() {
    // Bind then drop a listener so the port is known-closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{}/api/multion_webhook", addr);
    let webhook = AutomationWebhook::new("Friends", endpoint.clone(), "https://example.com", "noop");

    assert!(webhook.fetch().await.is_err());
}
