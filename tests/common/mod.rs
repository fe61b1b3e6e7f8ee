//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use cep_race::{Address, LookupAdapter, LookupError, LookupRequest, Source};

/// Canned answer of a mock provider.
#[derive(Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn ok(body: &str, delay_ms: u64) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn status(status: u16, delay_ms: u64) -> Self {
        Self {
            status,
            body: String::new(),
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Start a mock provider on an ephemeral port that answers every request with `response`.
///
/// Returns the base URL and a counter of requests received.
pub async fn start_mock_provider(response: MockResponse) -> (String, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let response = response.clone();
                    tokio::spawn(async move {
                        respond(socket, response).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (format!("http://{}", addr), hits)
}

async fn respond(mut socket: TcpStream, response: MockResponse) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    tokio::time::sleep(response.delay).await;

    let status = StatusCode::from_u16(response.status).unwrap();
    let response_str = format!(
        "HTTP/1.1 {} {}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{}",
        status.as_u16(),
        status.canonical_reason().unwrap_or(""),
        response.body.len(),
        response.body
    );
    let _ = socket.write_all(response_str.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Client for talking to mock providers, bypassing any system proxy.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// In-process adapter with a controllable delay and result.
pub struct FakeAdapter {
    pub source: Source,
    pub delay: Duration,
    pub result: Result<Address, LookupError>,
    pub completed: Arc<AtomicU32>,
}

impl FakeAdapter {
    pub fn new(source: Source, delay_ms: u64, result: Result<Address, LookupError>) -> Self {
        Self {
            source,
            delay: Duration::from_millis(delay_ms),
            result,
            completed: Arc::new(AtomicU32::new(0)),
        }
    }
}

#[async_trait]
impl LookupAdapter for FakeAdapter {
    fn source(&self) -> Source {
        self.source
    }

    async fn fetch(&self, _request: &LookupRequest) -> Result<Address, LookupError> {
        tokio::time::sleep(self.delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub fn address(street: &str, city: &str, region: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        region: region.to_string(),
    }
}
