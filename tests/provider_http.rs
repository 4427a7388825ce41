use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use talentvision_terminal::provider::spawn_scout_provider;
use talentvision_terminal::scouting_fetch::{analyze_players_with, normalize_base};
use talentvision_terminal::state::{AnalyzeRequest, Delta, ProviderCommand};

struct CapturedRequest {
    request_line: String,
    headers: Vec<String>,
    body: String,
}

/// Serves a single HTTP exchange on loopback and hands back what it received.
fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));
    let status = status.to_string();
    let body = body.to_string();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("request line");
        let mut headers = Vec::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("header line");
            let line = line.trim_end().to_string();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().expect("content length");
            }
            headers.push(line);
        }
        let mut buf = vec![0u8; content_length];
        reader.read_exact(&mut buf).expect("request body");

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush");

        let _ = tx.send(CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(buf).expect("utf8 body"),
        });
    });

    (base, rx)
}

fn forward_request() -> AnalyzeRequest {
    AnalyzeRequest {
        position: "Forward".to_string(),
        team: "Arsenal".to_string(),
        league: "Premier League".to_string(),
        specific_role_cols: vec!["Gls".to_string(), "xG".to_string()],
    }
}

#[test]
fn posts_json_to_analyze_players() {
    let fixture = include_str!("fixtures/analyze_players.json");
    let (base, rx) = serve_once("200 OK", fixture);

    let client = Client::builder().no_proxy().build().expect("client");
    let report =
        analyze_players_with(&client, &base, &forward_request()).expect("analysis should succeed");
    assert_eq!(report.team, "Arsenal");
    assert_eq!(report.similar_players.len(), 2);

    let captured = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("server saw the request");
    assert_eq!(captured.request_line, "POST /analyze-players HTTP/1.1");
    assert!(
        captured
            .headers
            .iter()
            .any(|h| h.eq_ignore_ascii_case("content-type: application/json"))
    );
    assert_eq!(
        captured.body,
        r#"{"position":"Forward","team":"Arsenal","league":"Premier League","specific_role_cols":["Gls","xG"]}"#
    );
}

#[test]
fn provider_reports_server_errors_with_status() {
    let (base, _rx) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#);
    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let handle = spawn_scout_provider(tx, cmd_rx, base);

    cmd_tx
        .send(ProviderCommand::Analyze {
            seq: 7,
            request: forward_request(),
        })
        .expect("provider alive");

    let outcome = loop {
        match rx.recv_timeout(Duration::from_secs(10)).expect("provider replied") {
            Delta::Log(_) => continue,
            other => break other,
        }
    };
    match outcome {
        Delta::AnalysisFailed { seq, detail } => {
            assert_eq!(seq, 7);
            assert!(detail.contains("500"), "{detail}");
        }
        other => panic!("expected failure, got {other:?}"),
    }

    drop(cmd_tx);
    handle.join().expect("provider exits when commands close");
}

#[test]
fn provider_reports_refused_connections() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));
    drop(listener);

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_scout_provider(tx, cmd_rx, base);
    cmd_tx
        .send(ProviderCommand::Analyze {
            seq: 1,
            request: forward_request(),
        })
        .expect("provider alive");

    let outcome = loop {
        match rx.recv_timeout(Duration::from_secs(10)).expect("provider replied") {
            Delta::Log(_) => continue,
            other => break other,
        }
    };
    assert!(matches!(outcome, Delta::AnalysisFailed { seq: 1, .. }));
}

#[test]
fn base_urls_are_normalized() {
    assert_eq!(
        normalize_base(" http://scout.local:8000/ ").as_deref(),
        Some("http://scout.local:8000")
    );
    assert_eq!(normalize_base("   "), None);
}
