#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Canned response a [`MockHttpBackend`] serves to every request.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub cache_control: Option<String>,
    pub body: Vec<u8>,
    /// Delay before answering, to provoke client timeouts.
    pub delay: Duration,
}

impl CannedResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            cache_control: None,
            body: body.as_bytes().to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::ok("")
        }
    }

    pub fn with_cache_control(mut self, value: &str) -> Self {
        self.cache_control = Some(value.to_string());
        self
    }

    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Minimal HTTP/1.1 server answering every request with one canned
/// response. Requested paths are recorded for assertions.
pub struct MockHttpBackend {
    addr: SocketAddr,
    paths: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockHttpBackend {
    pub async fn start(response: CannedResponse) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let paths = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let seen = Arc::clone(&paths);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { break };
                        let response = response.clone();
                        let seen = Arc::clone(&seen);
                        tokio::spawn(async move {
                            let mut buf = vec![0u8; 4096];
                            let Ok(read) = stream.read(&mut buf).await else { return };
                            if let Some(path) = request_path(&buf[..read]) {
                                seen.lock().unwrap().push(path);
                            }

                            if !response.delay.is_zero() {
                                tokio::time::sleep(response.delay).await;
                            }

                            let _ = stream.write_all(&render(&response)).await;
                            let _ = stream.shutdown().await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            paths,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Endpoint template pointing at this backend.
    pub fn endpoint(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Paths requested so far, in order.
    pub fn requested_paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Drop for MockHttpBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn request_path(request: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(request).ok()?;
    let mut parts = text.lines().next()?.split_whitespace();
    let _method = parts.next()?;
    parts.next().map(str::to_string)
}

fn render(response: &CannedResponse) -> Vec<u8> {
    let reason = match response.status {
        200 => "OK",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    };

    let mut head = format!("HTTP/1.1 {} {}\r\n", response.status, reason);
    if let Some(cache_control) = &response.cache_control {
        head.push_str(&format!("Cache-Control: {}\r\n", cache_control));
    }
    head.push_str(&format!("Content-Length: {}\r\n", response.body.len()));
    head.push_str("Connection: close\r\n\r\n");

    let mut bytes = head.into_bytes();
    bytes.extend_from_slice(&response.body);
    bytes
}
