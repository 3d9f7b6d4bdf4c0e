use crate::cli::support::{
    closed_endpoint, qa_url, run, vaultchat_in, write_sample_vault, QA_PATH,
};
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

fn answer_body() -> serde_json::Value {
    json!({
        "meta": {"id": "x", "node": "us-east", "ms": 1200},
        "data": {
            "output": "Ada was a mathematician.",
            "tokens": 88,
            "references": [
                {"title": "Ada Lovelace", "snippet": "English mathematician", "url": "https://example.com/ada"}
            ]
        }
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_without_key_fails_before_network() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    let server = MockServer::start().await;
    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mut cmd = vaultchat_in(vault.path(), config.path());
    cmd.env("VAULTCHAT_ENDPOINT", qa_url(&server))
        .args(["ask", "Who is Ada?", "--context", "#person"]);

    run(cmd)
        .await
        .assert()
        .code(3)
        .stderr(predicate::str::contains("API key not configured"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_with_context_sends_templated_query() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path(QA_PATH))
        .and(matchers::header("authorization", "Bot test-key"))
        .and(matchers::header("content-type", "application/json"))
        .and(matchers::body_json(json!({
            "query": "Based on the following notes from my vault:\n\n## A\n---\ntags: [person]\n---\nAda...\n\n\n\nQuestion: Who is Ada?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = vaultchat_in(vault.path(), config.path());
    cmd.env("VAULTCHAT_API_KEY", "test-key")
        .env("VAULTCHAT_ENDPOINT", qa_url(&server))
        .args(["ask", "Who is Ada?", "--context", "#person"]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("Context: A"))
        .stdout(predicate::str::contains("Answer:\nAda was a mathematician."))
        .stdout(predicate::str::contains("1. Ada Lovelace"))
        .stdout(predicate::str::contains("   https://example.com/ada"))
        .stdout(predicate::str::contains(
            "Tokens used: 88 | Response time: 1200ms",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_without_context_sends_bare_question() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::body_json(json!({"query": "What is the answer?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"output": "42"}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = vaultchat_in(vault.path(), config.path());
    cmd.env("VAULTCHAT_API_KEY", "test-key")
        .env("VAULTCHAT_ENDPOINT", qa_url(&server))
        .args(["ask", "What is the answer?"]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer:\n42"))
        .stdout(predicate::str::contains("References:").not())
        .stdout(predicate::str::contains(
            "Tokens used: 0 | Response time: 0ms",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_context_without_matches_sends_bare_question() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::body_json(json!({"query": "Anything?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"output": "ok"}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = vaultchat_in(vault.path(), config.path());
    cmd.env("VAULTCHAT_API_KEY", "test-key")
        .env("VAULTCHAT_ENDPOINT", qa_url(&server))
        .args(["ask", "Anything?", "--context", "#nomatch"]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("Context:").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_uses_stored_key() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::header("authorization", "Bot stored-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"output": "ok"}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut set_key = vaultchat_in(vault.path(), config.path());
    set_key.args(["config", "set-key", "  stored-key  "]);
    run(set_key).await.assert().success();

    let mut cmd = vaultchat_in(vault.path(), config.path());
    cmd.env("VAULTCHAT_ENDPOINT", qa_url(&server))
        .args(["ask", "Hello?"]);
    run(cmd).await.assert().success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_json_output() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = vaultchat_in(vault.path(), config.path());
    cmd.env("VAULTCHAT_API_KEY", "test-key")
        .env("VAULTCHAT_ENDPOINT", qa_url(&server))
        .args(["--format", "json", "ask", "Who is Ada?", "-c", "#person"]);

    let output = run(cmd).await;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["answer"], "Ada was a mathematician.");
    assert_eq!(json["tokens"], 88);
    assert_eq!(json["latency_ms"], 1200);
    assert_eq!(json["references"][0]["title"], "Ada Lovelace");
    assert_eq!(json["context_notes"][0]["name"], "A");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_http_error_status() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = vaultchat_in(vault.path(), config.path());
    cmd.env("VAULTCHAT_API_KEY", "test-key")
        .env("VAULTCHAT_ENDPOINT", qa_url(&server))
        .args(["ask", "Who is Ada?"]);

    run(cmd)
        .await
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to connect to API: HTTP 500"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_response_without_output() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"tokens": 3}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = vaultchat_in(vault.path(), config.path());
    cmd.env("VAULTCHAT_API_KEY", "test-key")
        .env("VAULTCHAT_ENDPOINT", qa_url(&server))
        .args(["--format", "json", "ask", "Who is Ada?"]);

    run(cmd)
        .await
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"malformed_response\""));
}

#[test]
fn test_ask_unreachable_endpoint() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    vaultchat_in(vault.path(), config.path())
        .env("VAULTCHAT_API_KEY", "test-key")
        .env("VAULTCHAT_ENDPOINT", closed_endpoint())
        .args(["ask", "Who is Ada?"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to connect to API"));
}

#[test]
fn test_ask_rejects_blank_question() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    vaultchat_in(vault.path(), config.path())
        .env("VAULTCHAT_API_KEY", "test-key")
        .env("VAULTCHAT_ENDPOINT", closed_endpoint())
        .args(["ask", "  "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please enter a question"));
}
