//! Loading over HTTP against a throwaway local server, and the error phase.

use campusnav::loader::{load_working_set, HttpSource, StaticSource};
use campusnav::ui::ResultsBody;
use campusnav::{handle_event, initialize, render_page, Event, LoadError, Phase, Theme};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

const FIXTURE: &str = include_str!("fixtures/buildings.json");

/// Serves exactly one request with the given status line and body.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let endpoint = format!("http://{}/buildings", listener.local_addr().expect("addr"));

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("request line");
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).expect("header");
            if header == "\r\n" || header.is_empty() {
                break;
            }
        }

        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .expect("response");
        stream.flush().expect("flush");
        request_line
    });

    (endpoint, handle)
}

// ── success ─────────────────────────────────────────────────────────

#[tokio::test]
async fn http_source_loads_the_campus() {
    let (endpoint, server) = serve_once("200 OK", FIXTURE);
    let source = HttpSource::new(endpoint).expect("client");

    let working_set = load_working_set(&source).await.expect("load");
    assert_eq!(working_set.len(), 41);

    let request_line = server.join().expect("server thread");
    assert!(request_line.starts_with("GET /buildings HTTP/1.1"));
}

// ── failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn server_error_is_a_status_error() {
    let (endpoint, server) = serve_once("500 Internal Server Error", "{}");
    let source = HttpSource::new(endpoint).expect("client");

    let err = load_working_set(&source).await.unwrap_err();
    server.join().expect("server thread");

    assert!(matches!(err, LoadError::Status { status: 500, .. }), "{err:?}");
    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn refused_connection_is_a_request_error() {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("free port")
        .port();
    let source = HttpSource::new(format!("http://127.0.0.1:{port}/buildings")).expect("client");

    let err = load_working_set(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Request(_)), "{err:?}");
}

#[tokio::test]
async fn non_array_payload_is_a_decode_error() {
    let (endpoint, server) = serve_once("200 OK", r#"{"buildings": []}"#);
    let source = HttpSource::new(endpoint).expect("client");

    let err = load_working_set(&source).await.unwrap_err();
    server.join().expect("server thread");
    assert!(matches!(err, LoadError::Decode(_)), "{err:?}");
}

// ── error phase ─────────────────────────────────────────────────────

#[tokio::test]
async fn failed_load_shows_only_the_error_notice() {
    let mut state = initialize(&StaticSource::new("<html>not json</html>")).await;
    assert!(matches!(state.phase, Phase::Error { .. }));

    let (render, actions) = handle_event(&mut state, &Event::InputChanged("hall".to_string()));
    assert!(!render);
    assert!(actions.is_empty());

    let vm = state.view_model();
    assert_eq!(vm.title, "Campus Locations");
    assert!(matches!(vm.body, ResultsBody::Error { .. }));

    let html = render_page(&vm, &Theme::default());
    assert!(html.contains("<h3>Error</h3>"));
    assert!(html.contains("Please check if the backend server is running."));
    assert!(!html.contains("data-building-id"));
}

#[tokio::test]
async fn empty_array_loads_an_empty_campus() {
    let state = initialize(&StaticSource::new("[]")).await;
    assert!(state.phase.is_loaded());
    assert_eq!(state.view_model().title, "Campus Locations (0 total)");
    assert!(matches!(state.view_model().body, ResultsBody::NoResults { .. }));
}
