//! Tests for stdin batch input (website argument "-") and comment/blank
//! line handling.

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_stdin_batch_processes_entries_and_skips_comments() {
    let server = MockServer::start().await;

    // Only the two real entries may reach the server; comments and blank
    // lines must be skipped before any request is made
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({"website": "example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "privacyGrade": "A+",
            "analysisSummary": "Highly privacy-friendly.",
            "examples": "",
            "cookiesFound": 0,
            "thirdPartyFound": 0,
            "storageFound": 0,
            "thirdPartyDomains": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({"website": "tracker-heavy.example"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "privacyGrade": "D",
            "analysisSummary": "Heavy tracking.",
            "examples": "",
            "cookiesFound": 30,
            "thirdPartyFound": 12,
            "storageFound": 4,
            "thirdPartyDomains": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut child = Command::new(env!("CARGO_BIN_EXE_privacy_grade"))
        .args([
            "-",
            "--endpoint",
            &server.uri(),
            "--format",
            "html",
            "--log-level",
            "error",
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"# comment line\nexample.com\n\n   \ntracker-heavy.example\n")
        .expect("should write stdin");

    let output = child.wait_with_output().expect("binary should exit");
    assert!(
        output.status.success(),
        "expected success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.matches("results-glass").count(),
        2,
        "one panel per real entry, got: {stdout}"
    );
    // Panels appear in input order
    let first = stdout.find("A+ Secure").expect("first panel present");
    let second = stdout.find("D Risk").expect("second panel present");
    assert!(first < second);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2, "comments and blanks must not be sent");
}

#[tokio::test]
async fn test_stdin_batch_failed_entry_sets_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({"website": "example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "privacyGrade": "A+"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({"website": "broken.example"})))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut child = Command::new(env!("CARGO_BIN_EXE_privacy_grade"))
        .args(["-", "--endpoint", &server.uri(), "--log-level", "error"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"example.com\nbroken.example\n")
        .expect("should write stdin");

    let output = child.wait_with_output().expect("binary should exit");
    assert!(
        !output.status.success(),
        "a failed analysis must exit nonzero"
    );

    // The failed entry still renders an error panel rather than aborting
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Server error: 500"));
}
