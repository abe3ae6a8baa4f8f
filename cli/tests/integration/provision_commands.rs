//! End-to-end tests for download, install, probe, run and editor.
//!
//! The Hub and the installer are stood in for by shell scripts, so these
//! tests only run on Unix.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Command running in `dir`, reading its config from `dir/config.yaml`.
fn hub_provision(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hub-provision"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("HUB_PROVISION_CONFIG", dir.join("config.yaml"));
    cmd
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

/// Point `hub.path` at a fake Hub script in `dir`.
fn fake_hub(dir: &Path, body: &str) -> PathBuf {
    let hub = write_script(dir, "unity-hub", body);
    std::fs::write(
        dir.join("config.yaml"),
        format!("hub:\n  path: '{}'\n", hub.display()),
    )
    .expect("write config");
    hub
}

fn serve_once(response: Vec<u8>) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(&response);
        }
    });
    port
}

fn http_ok(body: &[u8]) -> Vec<u8> {
    let mut out = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    out.extend_from_slice(body);
    out
}

// ── download ──────────────────────────────────────────────────────────────────

#[test]
fn test_download_writes_hubinstaller_exe_in_working_dir() {
    let dir = TempDir::new().expect("tempdir");
    let port = serve_once(http_ok(b"MZ installer bytes"));

    hub_provision(dir.path())
        .args(["download", "--url"])
        .arg(format!("http://127.0.0.1:{port}/UnityHubSetup.exe"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Installer downloaded."))
        .stdout(predicate::str::contains("SHA-256"));

    let written = std::fs::read(dir.path().join("hubinstaller.exe")).expect("installer");
    assert_eq!(written, b"MZ installer bytes");
}

#[test]
fn test_download_http_error_fails_and_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let port = serve_once(
        b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
    );

    hub_provision(dir.path())
        .args(["download", "--url"])
        .arg(format!("http://127.0.0.1:{port}/missing.exe"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 404"));

    assert!(!dir.path().join("hubinstaller.exe").exists());
}

#[test]
fn test_download_quiet_prints_nothing_on_success() {
    let dir = TempDir::new().expect("tempdir");
    let port = serve_once(http_ok(b"x"));

    hub_provision(dir.path())
        .args(["download", "--quiet", "--url"])
        .arg(format!("http://127.0.0.1:{port}/hub.exe"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── install ───────────────────────────────────────────────────────────────────

#[test]
fn test_install_without_installer_fails() {
    let dir = TempDir::new().expect("tempdir");
    hub_provision(dir.path())
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗ Installer not found"));
}

#[test]
fn test_install_wait_passes_silent_flag_and_reports_exit_code() {
    let dir = TempDir::new().expect("tempdir");
    write_script(dir.path(), "hubinstaller.exe", "echo \"$@\" > installer-args.txt\nexit 7");

    hub_provision(dir.path())
        .args(["install", "--wait"])
        .assert()
        .code(7);

    let args = std::fs::read_to_string(dir.path().join("installer-args.txt")).expect("args");
    assert_eq!(args.trim(), "/S");
}

// ── probe ─────────────────────────────────────────────────────────────────────

#[test]
fn test_probe_streams_every_line_until_exit() {
    let dir = TempDir::new().expect("tempdir");
    fake_hub(
        dir.path(),
        "echo \"args: $*\"\nsleep 0.2\necho 'Usage: Unity Hub'\nsleep 0.2\nprintf 'no trailing newline'",
    );

    hub_provision(dir.path())
        .arg("probe")
        .assert()
        .success()
        .stdout(predicate::str::contains("args: -- --headless help"))
        .stdout(predicate::str::contains("Usage: Unity Hub"))
        .stdout(predicate::str::contains("no trailing newline"))
        .stdout(predicate::str::contains("Hub responded (3 lines)."));
}

#[test]
fn test_probe_exit_code_is_hubs_exit_code() {
    let dir = TempDir::new().expect("tempdir");
    fake_hub(dir.path(), "echo 'not licensed'\nexit 5");

    hub_provision(dir.path())
        .arg("probe")
        .assert()
        .code(5)
        .stdout(predicate::str::contains("not licensed"));
}

#[test]
fn test_probe_trailing_args_replace_probe_args() {
    let dir = TempDir::new().expect("tempdir");
    fake_hub(dir.path(), "echo \"args: $*\"");

    hub_provision(dir.path())
        .args(["probe", "--", "--headless", "editors", "-i"])
        .assert()
        .success()
        .stdout(predicate::str::contains("args: --headless editors -i"));
}

#[test]
fn test_probe_missing_hub_fails() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(
        dir.path().join("config.yaml"),
        "hub:\n  path: /nonexistent/Unity Hub\n",
    )
    .expect("write config");

    hub_provision(dir.path())
        .arg("probe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unity Hub not found"));
}

#[test]
fn test_probe_timeout_kills_stalled_hub() {
    let dir = TempDir::new().expect("tempdir");
    fake_hub(dir.path(), "echo started\nexec sleep 30");

    hub_provision(dir.path())
        .args(["probe", "--timeout", "1"])
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .failure()
        .stdout(predicate::str::contains("started"))
        .stderr(predicate::str::contains("did not exit within 1s"));
}

// ── run ───────────────────────────────────────────────────────────────────────

#[test]
fn test_run_skip_download_installs_then_probes() {
    let dir = TempDir::new().expect("tempdir");
    write_script(dir.path(), "hubinstaller.exe", "echo \"$@\" > installer-args.txt");
    fake_hub(dir.path(), "echo 'Usage: Unity Hub -- --headless'");

    hub_provision(dir.path())
        .args(["run", "--skip-download", "--wait-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unity Hub provisioning"))
        .stdout(predicate::str::contains("Installer finished."))
        .stdout(predicate::str::contains("Usage: Unity Hub -- --headless"));

    let args = std::fs::read_to_string(dir.path().join("installer-args.txt")).expect("args");
    assert_eq!(args.trim(), "/S");
}

#[test]
fn test_run_download_failure_stops_before_install() {
    let dir = TempDir::new().expect("tempdir");
    let port = serve_once(
        b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_vec(),
    );
    let hub = write_script(dir.path(), "unity-hub", "touch hub-was-run");
    std::fs::write(
        dir.path().join("config.yaml"),
        format!(
            "installer:\n  url: http://127.0.0.1:{port}/hub.exe\nhub:\n  path: '{}'\n",
            hub.display()
        ),
    )
    .expect("write config");

    hub_provision(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 500"));

    assert!(!dir.path().join("hub-was-run").exists());
}

// ── editor ────────────────────────────────────────────────────────────────────

#[test]
fn test_editor_install_passes_version_and_modules() {
    let dir = TempDir::new().expect("tempdir");
    fake_hub(dir.path(), "echo \"args: $*\"");

    hub_provision(dir.path())
        .args(["editor", "--version", "2019.4.28f1", "-m", "android", "-m", "android-sdk-ndk-tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "args: -- --headless install --version 2019.4.28f1 -m android -m android-sdk-ndk-tools",
        ));
}

#[test]
fn test_editor_install_failure_reports_exit_code() {
    let dir = TempDir::new().expect("tempdir");
    fake_hub(dir.path(), "exit 3");

    hub_provision(dir.path())
        .args(["editor", "--version", "2019.4.28f1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exit code 3"));
}

#[test]
fn test_editor_without_version_fails() {
    let dir = TempDir::new().expect("tempdir");
    fake_hub(dir.path(), "exit 0");

    hub_provision(dir.path())
        .arg("editor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No editor version given"));
}
