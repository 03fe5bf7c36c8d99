//! End-to-end tests over a real socket

use std::sync::Arc;

use sentinel_etag::config::ETagConfig;
use sentinel_etag::handlers::routes;
use sentinel_etag::server::listener::serve;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start_server() -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Arc::new(routes(&ETagConfig::default()));

    tokio::spawn(async move {
        let _ = serve(listener, router).await;
    });

    addr
}

async fn send(addr: std::net::SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

fn header<'a>(response: &'a str, name: &str) -> Option<&'a str> {
    let head = response.split("\r\n\r\n").next()?;
    head.lines()
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case(name))
        .map(|(_, v)| v.trim())
}

#[tokio::test]
async fn test_health_then_revalidate() {
    let addr = start_server().await;

    let first = send(
        addr,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(first.starts_with("HTTP/1.1 200 OK\r\n"), "{}", first);
    assert!(first.ends_with("\r\n\r\n{\"healthy\":\"OK\"}"), "{}", first);
    let etag = header(&first, "ETag").expect("ETag header").to_string();
    assert_eq!(etag.len(), 34);

    let second = send(
        addr,
        &format!(
            "GET /health HTTP/1.1\r\nHost: localhost\r\nIf-None-Match: {}\r\nConnection: close\r\n\r\n",
            etag
        ),
    )
    .await;

    assert_eq!(second, "HTTP/1.1 304 Not Modified\r\n\r\n");
}

#[tokio::test]
async fn test_keep_alive_serves_multiple_requests() {
    let addr = start_server().await;

    let responses = send(
        addr,
        "GET /health HTTP/1.1\r\n\r\nGET /missing HTTP/1.1\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(responses.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(responses.contains("HTTP/1.1 404 Not Found\r\n"));
}

#[tokio::test]
async fn test_malformed_request_gets_bad_request() {
    let addr = start_server().await;

    let response = send(addr, "BREW /pot HTTP/1.1\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"), "{}", response);
}

#[tokio::test]
async fn test_post_to_health_has_no_etag() {
    let addr = start_server().await;

    let response = send(
        addr,
        "POST /health HTTP/1.1\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
    assert!(header(&response, "ETag").is_none());
}
