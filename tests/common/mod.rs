//! Shared utilities for integration testing against a mock JSON-RPC node.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Anvil's first development account.
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const TEST_CHAIN_ID: u64 = 31337;

/// Requests received by a mock node, in arrival order.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<(String, Value)>>>);

impl CallLog {
    pub fn methods(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn count(&self, method: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|(m, _)| m == method).count()
    }

    /// Params of every request for `method`.
    pub fn params(&self, method: &str) -> Vec<Value> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .collect()
    }

    fn push(&self, method: &str, params: &Value) {
        self.0.lock().unwrap().push((method.to_string(), params.clone()));
    }
}

/// Four-byte selector of an `eth_call` or transaction object, as `0x........`.
pub fn call_selector(params: &Value) -> Option<String> {
    let call = params.get(0)?;
    let input = call
        .get("input")
        .or_else(|| call.get("data"))?
        .as_str()?;
    input.get(..10).map(str::to_lowercase)
}

/// ABI-encode an address or uint as a single 32-byte word.
pub fn word(hex_value: &str) -> String {
    format!("0x{:0>64}", hex_value.trim_start_matches("0x").to_lowercase())
}

/// Start a programmable JSON-RPC node on an ephemeral port.
///
/// `handler` maps `(method, params)` to a JSON-RPC result, or to an error
/// message returned as a JSON-RPC error object.
pub async fn start_mock_node<F>(handler: F) -> (SocketAddr, CallLog)
where
    F: Fn(&str, &Value) -> Result<Value, String> + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log = CallLog::default();
    let handler = Arc::new(handler);

    let node_log = log.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let handler = handler.clone();
                    let log = node_log.clone();
                    tokio::spawn(async move {
                        let _ = serve_one(socket, handler.as_ref(), &log).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, log)
}

async fn serve_one<F>(mut socket: TcpStream, handler: &F, log: &CallLog) -> std::io::Result<()>
where
    F: Fn(&str, &Value) -> Result<Value, String>,
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request: Value = serde_json::from_slice(&buf[header_end..]).unwrap_or(Value::Null);
    let method = request["method"].as_str().unwrap_or_default().to_string();
    log.push(&method, &request["params"]);

    let body = match handler(&method, &request["params"]) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": request["id"], "result": result }),
        Err(message) => json!({
            "jsonrpc": "2.0",
            "id": request["id"],
            "error": { "code": -32000, "message": message }
        }),
    }
    .to_string();

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}
