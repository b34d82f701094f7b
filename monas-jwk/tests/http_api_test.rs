//! HTTP API tests.
//!
//! Each test starts the router on an ephemeral local port and talks plain HTTP/1.1
//! to it.

use std::net::SocketAddr;

use monas_jwk::config::ServerConfig;
use monas_jwk::presentation;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

struct TestResponse {
    status: u16,
    content_type: String,
    body: String,
}

async fn start_server(config: ServerConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = presentation::create_router(&config);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn get(addr: SocketAddr, path: &str, extra_headers: &[(&str, &str)]) -> TestResponse {
    send(addr, "GET", path, extra_headers).await
}

async fn send(
    addr: SocketAddr,
    method: &str,
    path: &str,
    extra_headers: &[(&str, &str)],
) -> TestResponse {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let mut request =
        format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (name, value) in extra_headers {
        request.push_str(&format!("{name}: {value}\r\n"));
    }
    request.push_str("\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let mut lines = head.lines();
    let status = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|code| code.parse().ok())
        .unwrap();
    let content_type = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default();

    TestResponse {
        status,
        content_type,
        body: body.to_string(),
    }
}

#[tokio::test]
async fn test_help_paths_return_usage() {
    let addr = start_server(ServerConfig::default()).await;

    for path in ["/help", "/usage", "/h", "/u", "/HELP", "/Usage"] {
        let response = get(addr, path, &[]).await;
        assert_eq!(response.status, 200, "{path}");
        assert!(response.content_type.starts_with("text/plain"), "{path}");
        assert!(
            response.body.contains(&format!("curl http://{addr}/jwk?kty=kty")),
            "{path}: {}",
            response.body
        );
    }
}

#[tokio::test]
async fn test_unknown_path_returns_usage_with_bad_request() {
    let addr = start_server(ServerConfig::default()).await;

    for path in ["/", "/keys", "/jwk/extra"] {
        let response = get(addr, path, &[]).await;
        assert_eq!(response.status, 400, "{path}");
        assert!(response.body.contains("Usage:"), "{path}");
    }
}

#[tokio::test]
async fn test_jwk_returns_key_pair_json() {
    let addr = start_server(ServerConfig::default()).await;

    let response = get(addr, "/jwk?kty=EC&params=P-256", &[]).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.content_type, "application/json");

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["private_key"]["kty"], "EC");
    assert_eq!(body["private_key"]["crv"], "P-256");
    assert!(body["public_key"].get("d").is_none());
    assert_eq!(body["public_key"]["kid"], body["private_key"]["kid"]);
    assert_eq!(body["private_public_pair"], body["private_key"]);
}

#[tokio::test]
async fn test_jwk_defaults_and_case_insensitive_path() {
    let addr = start_server(ServerConfig::default()).await;

    let response = get(addr, "/JWK?kty=EC", &[]).await;
    assert_eq!(response.status, 200);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["private_key"]["crv"], "P-521");

    let response = get(addr, "/jwk?kty=RSA&params=1024", &[]).await;
    assert_eq!(response.status, 200);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["public_key"]["kty"], "RSA");
    assert_eq!(body["public_key"]["e"], "AQAB");
}

#[tokio::test]
async fn test_jwk_errors_return_usage_with_bad_request() {
    let addr = start_server(ServerConfig::default()).await;

    for path in [
        "/jwk",
        "/jwk?params=2048",
        "/jwk?kty=DSA",
        "/jwk?kty=RSA&params=2000",
        "/jwk?kty=RSA&params=big",
        "/jwk?kty=EC&params=wow",
    ] {
        let response = get(addr, path, &[]).await;
        assert_eq!(response.status, 400, "{path}");
        assert!(response.content_type.starts_with("text/plain"), "{path}");
        assert!(response.body.contains("Usage:"), "{path}");
    }
}

#[tokio::test]
async fn test_usage_uses_configured_base_url() {
    let config = ServerConfig {
        public_base_url: Some("https://keys.example.com/prod".to_string()),
        ..ServerConfig::default()
    };
    let addr = start_server(config).await;

    let response = get(addr, "/help", &[]).await;
    assert!(response
        .body
        .contains("curl -s \"https://keys.example.com/prod/jwk?kty=EC&params=P-256\""));
}

#[tokio::test]
async fn test_usage_honours_forwarded_proto() {
    let addr = start_server(ServerConfig::default()).await;

    let response = get(addr, "/usage", &[("X-Forwarded-Proto", "https")]).await;
    assert!(response.body.contains(&format!("https://{addr}/help")));
}

#[tokio::test]
async fn test_other_methods_get_usage_page() {
    let addr = start_server(ServerConfig::default()).await;

    for path in ["/help", "/U"] {
        let response = send(addr, "POST", path, &[("Content-Length", "0")]).await;
        assert_eq!(response.status, 200, "{path}");
        assert!(response.body.contains("Usage:"), "{path}");
    }

    for (method, path) in [("POST", "/jwk?kty=EC"), ("DELETE", "/jwk"), ("PUT", "/JWK?kty=EC")] {
        let response = send(addr, method, path, &[("Content-Length", "0")]).await;
        assert_eq!(response.status, 400, "{method} {path}");
        assert!(response.content_type.starts_with("text/plain"), "{method} {path}");
        assert!(response.body.contains("Usage:"), "{method} {path}");
    }
}
