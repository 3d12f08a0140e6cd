//! Test helpers: build the router against a throwaway upload folder.
//!
//! Run from workspace root: `cargo test -p filedrop-api`.

#![allow(dead_code)]

use axum_test::TestServer;
use filedrop_api::setup::build_app;
use filedrop_core::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_RELEASE_VERSION: &str = "1.2.3-test";

/// Test application: server plus the directory uploads land in.
pub struct TestApp {
    pub server: TestServer,
    pub storage_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn stored_file(&self, name: &str) -> PathBuf {
        self.storage_dir.join(name)
    }

    /// Names of everything currently in the upload folder, sorted.
    pub fn stored_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.storage_dir)
            .expect("read upload folder")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

/// Setup test app with default configuration and a fresh upload folder.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|config| config).await
}

/// Setup test app, letting the caller adjust the configuration first.
pub async fn setup_test_app_with<F>(customize: F) -> TestApp
where
    F: FnOnce(Config) -> Config,
{
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage_dir = temp_dir.path().join("uploads");

    let config = customize(
        Config::default()
            .with_release_version(TEST_RELEASE_VERSION)
            .with_upload_folder(&storage_dir),
    );

    let (_state, app) = build_app(config).await.expect("Failed to build app");
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        storage_dir,
        _temp_dir: temp_dir,
    }
}
