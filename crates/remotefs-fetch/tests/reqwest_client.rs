//! Exercises [`ReqwestClient`] against a throw-away HTTP/1.1 responder on localhost.

#![cfg(feature = "reqwest")]

use std::net::SocketAddr;

use remotefs_fetch::{
    ClientSettings, CredentialCache, ErrorKind, FetchOptions, Fetcher, NullIo, RemoteFilesystem,
    ReqwestClient,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const BASIC_LOGIN_PASSWORD: &str = "Basic bG9naW46cGFzc3dvcmQ=";

async fn respond(mut stream: TcpStream) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request).into_owned();
    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
    let authorized = request.lines().any(|line| {
        line.split_once(':').is_some_and(|(name, value)| {
            name.eq_ignore_ascii_case("authorization") && value.trim() == BASIC_LOGIN_PASSWORD
        })
    });

    let (status, body) = match path.as_str() {
        "/index.html" => ("200 OK", "Example Domain (RFC 2606)"),
        "/private/packages.json" if authorized => ("200 OK", "{\"packages\":{}}"),
        "/private/packages.json" => ("401 Unauthorized", ""),
        "/broken" => ("500 Internal Server Error", ""),
        _ => ("404 Not Found", ""),
    };
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Serve on a background thread with its own runtime so blocking callers work too.
fn spawn_server() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = TcpListener::from_std(listener).unwrap();
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(respond(stream));
            }
        });
    });

    addr
}

fn client() -> ReqwestClient { ReqwestClient::with_settings(ClientSettings::default().no_proxy()).unwrap() }

#[tokio::test]
async fn test_reqwest_get_contents() {
    let addr = spawn_server();
    let fetcher = Fetcher::new(client(), NullIo::new());
    let origin = format!("http://{addr}");

    let contents = fetcher
        .get_contents(&origin, &format!("{origin}/index.html"))
        .await
        .unwrap();

    assert_eq!(&contents[..], b"Example Domain (RFC 2606)");
}

#[tokio::test]
async fn test_reqwest_status_classification() {
    let addr = spawn_server();
    let fetcher = Fetcher::new(client(), NullIo::new());
    let origin = format!("http://{addr}");

    let missing = fetcher
        .get_contents(&origin, &format!("{origin}/missing.zip"))
        .await
        .unwrap_err();
    let private = fetcher
        .get_contents(&origin, &format!("{origin}/private/packages.json"))
        .await
        .unwrap_err();
    let broken = fetcher
        .get_contents(&origin, &format!("{origin}/broken"))
        .await
        .unwrap_err();

    assert_eq!(missing.kind(), ErrorKind::NotFound);
    assert_eq!(private.kind(), ErrorKind::AuthenticationRequired);
    assert_eq!(broken.kind(), ErrorKind::Transport);
    assert_eq!(broken.status(), Some(500));
}

#[tokio::test]
async fn test_reqwest_sends_basic_auth() {
    let addr = spawn_server();
    let io = NullIo::with_credentials(CredentialCache::new().with_last_credentials("login", "password"));
    let fetcher = Fetcher::new(client(), io);
    let origin = format!("http://{addr}");

    let contents = fetcher
        .get_contents(&origin, &format!("{origin}/private/packages.json"))
        .await
        .unwrap();

    assert_eq!(&contents[..], b"{\"packages\":{}}");
    assert_eq!(fetcher.io().credentials().len(), 1);
}

#[tokio::test]
async fn test_reqwest_connection_refused_is_transport() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let fetcher = Fetcher::new(client(), NullIo::new());
    let origin = format!("http://{addr}");

    let err = fetcher
        .get_contents(&origin, &format!("{origin}/index.html"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
}

#[test]
fn test_blocking_copy_over_http() {
    let addr = spawn_server();
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("index.html");
    let origin = format!("http://{addr}");
    let fs = RemoteFilesystem::with_settings(
        NullIo::new(),
        ClientSettings::default().no_proxy(),
        FetchOptions::default().progress(false),
    )
    .unwrap();

    fs.copy(&origin, &format!("{origin}/index.html"), &destination).unwrap();

    assert_eq!(std::fs::read_to_string(&destination).unwrap(), "Example Domain (RFC 2606)");
}
