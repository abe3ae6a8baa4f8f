//! Unit tests for the installer download service.

#![allow(clippy::expect_used)]

use std::path::Path;

use hub_provision::application::services::fetch::fetch_installer;
use hub_provision::domain::config::{DEFAULT_INSTALLER_URL, InstallerConfig};

use crate::helpers::{CollectReporter, RecordingDownloader};

#[tokio::test]
async fn fetch_writes_fixed_file_name_in_work_dir() {
    let downloader = RecordingDownloader::default();
    let reporter = CollectReporter::default();
    let work_dir = Path::new("/agent/work");

    let outcome = fetch_installer(&downloader, &reporter, &InstallerConfig::default(), work_dir)
        .await
        .expect("fetch");

    assert_eq!(outcome.path, work_dir.join("hubinstaller.exe"));
    let calls = downloader.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, DEFAULT_INSTALLER_URL);
    assert_eq!(calls[0].1, work_dir.join("hubinstaller.exe"));
}

#[tokio::test]
async fn fetch_reports_download_size_and_digest() {
    let downloader = RecordingDownloader::default();
    let reporter = CollectReporter::default();

    let outcome = fetch_installer(
        &downloader,
        &reporter,
        &InstallerConfig::default(),
        Path::new("/w"),
    )
    .await
    .expect("fetch");

    assert_eq!(outcome.report.bytes, 42);
    assert_eq!(outcome.report.sha256.len(), 64);
    assert_eq!(
        reporter.events(),
        vec![
            "step: Downloading the hub installer...",
            "success: Installer downloaded."
        ]
    );
}

#[tokio::test]
async fn fetch_uses_configured_url_and_file() {
    let downloader = RecordingDownloader::default();
    let installer = InstallerConfig {
        url: "https://mirror.example.com/hub/UnityHubSetup-3.7.exe".to_string(),
        file: "UnityHubSetup.exe".to_string(),
        ..InstallerConfig::default()
    };

    let outcome = fetch_installer(
        &downloader,
        &CollectReporter::default(),
        &installer,
        Path::new("/w"),
    )
    .await
    .expect("fetch");

    assert_eq!(outcome.path, Path::new("/w/UnityHubSetup.exe"));
    assert_eq!(downloader.calls.borrow()[0].0, installer.url);
}

#[tokio::test]
async fn fetch_rejects_file_name_with_directories_before_downloading() {
    let downloader = RecordingDownloader::default();
    let installer = InstallerConfig {
        file: "../escape.exe".to_string(),
        ..InstallerConfig::default()
    };

    let err = fetch_installer(
        &downloader,
        &CollectReporter::default(),
        &installer,
        Path::new("/w"),
    )
    .await
    .expect_err("must reject");

    assert!(err.to_string().contains("installer.file"), "got: {err}");
    assert!(downloader.calls.borrow().is_empty());
}

#[tokio::test]
async fn fetch_failure_propagates_without_success_event() {
    let downloader = RecordingDownloader {
        fail: true,
        ..RecordingDownloader::default()
    };
    let reporter = CollectReporter::default();

    let err = fetch_installer(
        &downloader,
        &reporter,
        &InstallerConfig::default(),
        Path::new("/w"),
    )
    .await
    .expect_err("must fail");

    assert!(err.to_string().contains("503"), "got: {err}");
    assert!(!reporter.events().iter().any(|e| e.starts_with("success")));
}
