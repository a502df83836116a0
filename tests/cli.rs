//! CLI integration tests
//!
//! Executes the `site-smoke` binary against mock sites and checks the report
//! on stdout and the process exit code.

use std::process::Output;

use tokio::process::Command;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run_binary(args: &[&str]) -> Output {
    run_binary_with_env(args, &[]).await
}

async fn run_binary_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_site-smoke"));
    command.args(args).env("RUST_LOG", "warn");
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().await.expect("run site-smoke binary")
}

async fn html_site(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"))
        .mount(&server)
        .await;
    server
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn exits_zero_when_all_cases_pass() {
    let server = html_site("<html><head><title>Home</title></head></html>").await;
    let output = run_binary(&["--base-url", &server.uri()]).await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("website_loads"));
    assert!(stdout.contains("website_title"));
    assert!(stdout.contains("Ran 2 cases: 2 passed, 0 failed, 0 errored"));
}

#[tokio::test]
async fn exits_non_zero_when_a_case_fails() {
    let server = html_site("<html><body>No title here</body></html>").await;
    let output = run_binary(&["--base-url", &server.uri()]).await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.contains("Website should have a title tag"));
    assert!(stdout.contains("1 passed, 1 failed, 0 errored"));
}

#[tokio::test]
async fn exits_non_zero_and_summarises_when_unreachable() {
    let url = closed_port_url();
    let output = run_binary(&["--base-url", &url]).await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.contains("ERROR"));
    assert!(stdout.contains("0 passed, 0 failed, 2 errored"));
}

#[tokio::test]
async fn json_output_is_machine_readable() {
    let server = html_site("<title>Home</title>").await;
    let output = run_binary(&["--base-url", &server.uri(), "--output", "json"]).await;

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["passed"], 2);
    assert_eq!(report["cases"][0]["name"], "website_loads");
    assert_eq!(report["cases"][0]["status"], "passed");
}

#[tokio::test]
async fn environment_does_not_change_the_target() {
    let server = html_site("<title>Home</title>").await;
    let stray = closed_port_url();
    let output = run_binary_with_env(
        &["--base-url", &server.uri()],
        &[("SITE_SMOKE_BASE_URL", "not a url"), ("BASE_URL", stray.as_str())],
    )
    .await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains(&server.uri()));
}

#[tokio::test]
async fn invalid_base_url_is_a_configuration_error() {
    let output = run_binary(&["--base-url", "ftp://localhost/site"]).await;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_ne!(output.status.code(), Some(0));
    assert!(stderr.contains("Base URL must use http or https"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn unsupported_output_format_is_rejected() {
    let server = html_site("<title>Home</title>").await;
    let output = run_binary(&["--base-url", &server.uri(), "--output", "table"]).await;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_ne!(output.status.code(), Some(0));
    assert!(stderr.contains("Unsupported output format"), "stderr: {}", stderr);
}
