//! Shared testing harness for `msforge` integration tests.

use assert_cmd::Command;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default store location inside the work directory.
    pub(crate) fn store_path(&self) -> PathBuf {
        self.work_dir.join(".msforge").join("services.json")
    }

    /// Build a command for invoking the compiled `msforge` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("msforge").expect("Failed to locate msforge binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("MSFORGE_STORE")
            .env_remove("MSFORGE_LOG");
        cmd
    }

    /// Write a service definition file into the work directory and return its path.
    pub(crate) fn write_definition(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(file_name);
        fs::write(&path, content).expect("Failed to write service definition");
        path
    }

    /// Write a minimal YAML definition for `name` and add it through the CLI.
    pub(crate) fn add_service(&self, name: &str) {
        self.add_service_with(name, "");
    }

    /// Add a service whose YAML definition carries `extra` lines after the required keys.
    pub(crate) fn add_service_with(&self, name: &str, extra: &str) {
        let package = name.replace('-', "");
        let content = format!(
            "name: {name}\ngroup: com.example\nartifact: {name}\npackageName: com.example.{package}\n{extra}"
        );
        let file = format!("{name}.yml");
        self.write_definition(&file, &content);
        self.cli().args(["service", "add", &file]).assert().success();
    }

    /// Read the raw JSON store written by the CLI.
    pub(crate) fn read_store(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.store_path()).expect("Failed to read store");
        serde_json::from_str(&content).expect("Store is not valid JSON")
    }

    /// Entry names of a zip archive on disk, in archive order.
    pub(crate) fn archive_entries(&self, path: &Path) -> Vec<String> {
        let bytes = fs::read(path).expect("Failed to read archive");
        zip_entry_names(&bytes)
    }

    /// Read one entry of a zip archive on disk as text.
    pub(crate) fn archive_text(&self, path: &Path, entry: &str) -> String {
        let bytes = fs::read(path).expect("Failed to read archive");
        zip_entry_text(&bytes, entry)
    }
}

pub(crate) fn zip_entry_names(bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("Invalid zip archive");
    (0..archive.len())
        .map(|i| archive.by_index(i).expect("Unreadable zip entry").name().to_string())
        .collect()
}

pub(crate) fn zip_entry_bytes(bytes: &[u8], entry: &str) -> Vec<u8> {
    use std::io::Read;
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("Invalid zip archive");
    let mut file = archive.by_name(entry).expect("Missing zip entry");
    let mut out = Vec::new();
    file.read_to_end(&mut out).expect("Failed to read zip entry");
    out
}

pub(crate) fn zip_entry_text(bytes: &[u8], entry: &str) -> String {
    String::from_utf8(zip_entry_bytes(bytes, entry)).expect("Zip entry is not UTF-8")
}
