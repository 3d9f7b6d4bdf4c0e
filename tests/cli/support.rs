use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Output;
use wiremock::MockServer;

/// Get a Command for vaultchat with no inherited settings
pub fn vaultchat() -> Command {
    let mut cmd = cargo_bin_cmd!("vaultchat");
    cmd.env_remove("VAULTCHAT_API_KEY")
        .env_remove("VAULTCHAT_ENDPOINT")
        .env_remove("VAULTCHAT_TIMEOUT")
        .env_remove("VAULTCHAT_VAULT")
        .env_remove("VAULTCHAT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// vaultchat bound to a vault and an isolated settings directory
pub fn vaultchat_in(vault: &Path, config_dir: &Path) -> Command {
    let mut cmd = vaultchat();
    cmd.env("VAULTCHAT_CONFIG_DIR", config_dir)
        .arg("--vault")
        .arg(vault);
    cmd
}

/// Write a note into a vault, creating parent directories
pub fn write_note(vault: &Path, relative: &str, content: &str) -> PathBuf {
    let path = vault.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// The two-note vault used across tests: one tagged person, one unrelated
pub fn write_sample_vault(vault: &Path) {
    write_note(vault, "A.md", "---\ntags: [person]\n---\nAda...");
    write_note(vault, "B.md", "unrelated");
}

/// Path the question-answering mock is mounted on
pub const QA_PATH: &str = "/api/v0/fastgpt";

/// Endpoint URL for a mock question-answering server
pub fn qa_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), QA_PATH)
}

/// URL of a local port nothing listens on
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, QA_PATH)
}

/// Run a command on a blocking thread so the mock server keeps serving
pub async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}
