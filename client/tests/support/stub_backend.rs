//! One-shot HTTP responder on a loopback port.
//!
//! Each stub accepts a single connection, records the raw request, and
//! answers with a canned response. Tests then inspect what the client sent.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Canned reply for one request.
pub struct CannedResponse {
    pub status_line: &'static str,
    pub content_type: &'static str,
    pub body: &'static str,
}

impl CannedResponse {
    pub const fn json(status_line: &'static str, body: &'static str) -> Self {
        Self {
            status_line,
            content_type: "application/json",
            body,
        }
    }

    pub const fn html(status_line: &'static str, body: &'static str) -> Self {
        Self {
            status_line,
            content_type: "text/html",
            body,
        }
    }
}

/// A running stub and the base URL that reaches it.
pub struct StubBackend {
    pub base_url: String,
    request: JoinHandle<String>,
}

impl StubBackend {
    /// Serve `response` to the first connection.
    pub async fn respond_once(response: CannedResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept connection");
            let request = read_request(&mut socket).await;
            let reply = format!(
                "HTTP/1.1 {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                response.status_line,
                response.content_type,
                response.body.len(),
                response.body,
            );
            socket
                .write_all(reply.as_bytes())
                .await
                .expect("write response");
            socket.shutdown().await.ok();
            request
        });
        Self {
            base_url: format!("http://{addr}/mock"),
            request,
        }
    }

    /// Accept a connection and never answer it.
    pub async fn hang() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept connection");
            let request = read_request(&mut socket).await;
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
            request
        });
        Self {
            base_url: format!("http://{addr}/mock"),
            request,
        }
    }

    /// Raw request text (head and body) as received.
    pub async fn received(self) -> String {
        self.request.await.expect("stub task")
    }

    /// Stop a stub that will never finish on its own.
    pub fn abort(self) {
        self.request.abort();
    }
}

/// Base URL of a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}/mock")
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let read = socket.read(&mut chunk).await.expect("read request");
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(chunk.get(..read).unwrap_or_default());
        if request_complete(&buffer) {
            break;
        }
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

fn request_complete(buffer: &[u8]) -> bool {
    let text = String::from_utf8_lossy(buffer);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let expected = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body.len() >= expected
}
