#![allow(dead_code)]

use ghstar::auth::Credentials;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use url::Url;

pub const TEST_USER: &str = "octocat";
pub const TEST_TOKEN: &str = "secret";
/// base64("octocat:secret")
pub const TEST_BASIC_AUTH: &str = "basic b2n0b2nhddpzzwnyzxq=";

pub fn test_credentials() -> Credentials {
    Credentials::resolve(Some(TEST_USER.to_string()), Some(TEST_TOKEN.to_string()))
        .expect("test credentials should be valid")
}

pub struct CannedResponse {
    pub status: u16,
    pub body: String,
    raw: Option<String>,
}

impl CannedResponse {
    pub fn new(status: u16, body: &str) -> Self {
        CannedResponse {
            status,
            body: body.to_string(),
            raw: None,
        }
    }

    /// Bytes written back verbatim, for responses that aren't valid HTTP.
    pub fn raw(text: &str) -> Self {
        CannedResponse {
            status: 0,
            body: String::new(),
            raw: Some(text.to_string()),
        }
    }

    pub fn no_content() -> Self {
        Self::new(204, "")
    }

    fn to_http(&self) -> String {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        if self.status == 204 {
            return "HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string();
        }
        format!(
            "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            self.body.len(),
            self.body
        )
    }
}

/// A one-shot HTTP server on localhost that answers each connection with the
/// next canned response and records the request head it received.
pub struct FakeGitHub {
    pub base_url: Url,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeGitHub {
    pub fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind failed");
        let addr = listener.local_addr().expect("no local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        thread::spawn(move || {
            for response in responses {
                let (mut stream, _) = listener.accept().expect("accept failed");
                let head = read_head(&mut stream);
                recorded.lock().unwrap().push(head);
                stream
                    .write_all(response.to_http().as_bytes())
                    .expect("write failed");
            }
        });

        FakeGitHub {
            base_url: Url::parse(&format!("http://{}", addr)).unwrap(),
            requests,
        }
    }

    /// Request heads received so far, lowercased.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// First line of each request, e.g. `put /user/starred/a/b http/1.1`.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.lines().next().unwrap_or_default().to_string())
            .collect()
    }
}

fn read_head(stream: &mut std::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0_u8; 1024];
    loop {
        let n = stream.read(&mut buf).expect("read failed");
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&head).to_lowercase()
}

/// A base URL nothing is listening on.
pub fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);
    Url::parse(&format!("http://{}", addr)).unwrap()
}
