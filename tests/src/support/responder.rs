//! A single-purpose HTTP/1.1 server that answers every request with the same
//! canned response and records the request lines it saw.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use vinscope_common::config::Config;

pub struct Responder {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl Responder {
    pub async fn json(body: serde_json::Value) -> anyhow::Result<Self> {
        Self::start(200, body.to_string()).await
    }

    pub async fn start(status: u16, body: String) -> anyhow::Result<Self> {
        let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        let handle = tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let request_line: String = read_request_line(&mut socket).await;
                seen.lock().unwrap().push(request_line);

                let response: String = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    pub fn config(&self) -> Config {
        Config {
            endpoint: format!("http://{}/api/vehicles", self.addr),
            no_proxy: true,
            ..Config::default()
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Reads the request head and returns its first line.
async fn read_request_line(socket: &mut TcpStream) -> String {
    let mut head: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];

    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }

    String::from_utf8_lossy(&head)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// A config whose endpoint has nothing listening behind it.
pub async fn dead_endpoint() -> anyhow::Result<Config> {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    drop(listener);

    Ok(Config {
        endpoint: format!("http://{addr}/api/vehicles"),
        no_proxy: true,
        ..Config::default()
    })
}
