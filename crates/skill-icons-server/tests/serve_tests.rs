//! Tests for the server lifecycle over a real socket.

use std::sync::Arc;
use std::time::Duration;

use skill_icons_server::{AppState, ServerConfig, ServerError, server};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("Failed to connect");
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to send request");

    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("Failed to read response");
    response
}

#[tokio::test]
async fn test_serve_and_shutdown() {
    let config = ServerConfig::new("127.0.0.1", 0);
    let service = Arc::new(config.load_service().unwrap());
    let state = AppState::new(service, &config).unwrap();

    let listener = TcpListener::bind(config.socket_addr().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server::serve(listener, state, async move {
        let _ = stop_rx.await;
    }));

    let response = raw_get(addr, "/icons?i=js,ts&t=light").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.to_ascii_lowercase().contains("content-type: image/svg+xml"));
    assert!(response.contains("<svg"));

    let response = raw_get(addr, "/icons?i=js&perline=0").await;
    assert!(response.starts_with("HTTP/1.1 400"), "{response}");

    stop_tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("Server should stop after shutdown signal")
        .expect("Server task should not panic");
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_run_fails_on_missing_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig::new("127.0.0.1", 0).catalogue_path(dir.path().join("icons.json"));

    let err = server::run(config).await.unwrap_err();
    assert!(matches!(err, ServerError::Core(_)), "{err}");
}

#[tokio::test]
async fn test_run_fails_on_bad_address() {
    let config = ServerConfig::new("not-an-ip", 0);
    let err = server::run(config).await.unwrap_err();
    assert!(matches!(err, ServerError::InvalidAddress(_)));
}

#[tokio::test]
async fn test_strict_aliases_with_partial_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icons.json");
    std::fs::write(&path, r#"{"javascript": "<svg/>"}"#).unwrap();

    let strict = ServerConfig::default().catalogue_path(&path).strict_aliases(true);
    assert!(matches!(strict.load_service(), Err(ServerError::Core(_))));

    let lenient = ServerConfig::default().catalogue_path(&path);
    let service = lenient.load_service().unwrap();
    assert_eq!(service.resolver().alias_target("js"), Some("javascript"));
    assert_eq!(service.resolver().alias_target("ts"), None);
}
