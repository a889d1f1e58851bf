//! Test helpers: a one-shot HTTP server on `std::net` and canned provider bodies.
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use reqwest::blocking::Client;

/// Yahoo chart body: three minute bars, the newest with a missing close.
pub const CHART_BODY: &str = r#"{
    "chart": {
        "result": [{
            "meta": {"currency": "USD", "symbol": "EURUSD=X"},
            "timestamp": [1714658280, 1714658340, 1714658400],
            "indicators": {"quote": [{
                "open": [1.0818, 1.0821, 1.0824],
                "close": [1.0821, 1.0823, null]
            }]}
        }],
        "error": null
    }
}"#;

/// Client that never routes loopback traffic through a proxy from the environment.
pub fn test_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

/// Base URL of a local port with nothing listening on it.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Serves exactly one HTTP request with a fixed response, then closes.
pub struct OneShotServer {
    /// `http://127.0.0.1:<port>` of the listening socket.
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Bind a loopback port and answer the first request with `status` and `body`.
    pub fn respond(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }

            let reason = if status == 200 { "OK" } else { "Error" };
            write!(
                stream,
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            request_line.trim_end().to_string()
        });

        OneShotServer {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// Wait for the request to be served and return its request line.
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}
