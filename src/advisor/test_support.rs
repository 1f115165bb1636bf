//! Local sockets standing in for the chat completions service.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

use crate::config::AdvisorConfig;

pub fn config_for(addr: SocketAddr) -> AdvisorConfig {
    AdvisorConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 1,
        ..AdvisorConfig::default()
    }
}

/// Accepts connections but never answers. Keep it alive for the request.
pub fn silent_listener() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// An address nothing listens on.
pub fn closed_addr() -> SocketAddr {
    let (listener, addr) = silent_listener();
    drop(listener);
    addr
}

/// Serve one request with `status` and a JSON `body`, then hand back the raw
/// request text.
pub fn serve_once(status: &str, body: &str) -> (SocketAddr, JoinHandle<String>) {
    let (listener, addr) = silent_listener();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (addr, handle)
}

/// Read headers plus a `Content-Length` body.
fn read_request(stream: &mut impl Read) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
        let text = String::from_utf8_lossy(&data);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if data.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}
