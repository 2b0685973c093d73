//! Project archive generation: one zip per service, and a zip of zips for a batch.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::{AppError, ServiceConfig, project_files};

pub const ARCHIVE_EXTENSION: &str = ".zip";

/// Archive name used for a single service, e.g. `user-service.zip`.
pub fn archive_file_name(config: &ServiceConfig) -> String {
    format!("{}{ARCHIVE_EXTENSION}", config.name)
}

/// Service for packaging generated projects.
pub struct ProjectArchiver;

impl ProjectArchiver {
    /// Render one service's project and package it as a zip archive.
    ///
    /// Returns the complete archive or an error; never partial bytes.
    pub fn generate(config: &ServiceConfig) -> Result<Vec<u8>, AppError> {
        let mut archive = ArchiveBuilder::new();
        for file in project_files(config) {
            archive.add(&file.path, file.contents.as_bytes())?;
        }
        let bytes = archive.finish()?;
        tracing::debug!(service = %config.name, bytes = bytes.len(), "archive: project generated");
        Ok(bytes)
    }

    /// Package every service's project archive into one outer archive.
    ///
    /// Services are generated sequentially; the first failure aborts the
    /// whole batch. Two services sharing a name would collide on the same
    /// entry, so that is rejected up front.
    pub fn generate_all(configs: &[ServiceConfig]) -> Result<Vec<u8>, AppError> {
        let mut seen = HashSet::new();
        for config in configs {
            if !seen.insert(config.name.as_str()) {
                return Err(AppError::invalid(
                    "name",
                    format!("'{}' is used by more than one service in the batch", config.name),
                ));
            }
        }

        let mut archive = ArchiveBuilder::new();
        for config in configs {
            let inner = Self::generate(config)?;
            archive.add(&archive_file_name(config), &inner)?;
        }
        let bytes = archive.finish()?;
        tracing::debug!(services = configs.len(), bytes = bytes.len(), "archive: batch generated");
        Ok(bytes)
    }
}

/// In-memory zip writer with deterministic entry metadata.
struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
}

impl ArchiveBuilder {
    fn new() -> Self {
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(9))
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);
        Self { writer: ZipWriter::new(Cursor::new(Vec::new())), options }
    }

    fn add(&mut self, name: &str, contents: &[u8]) -> Result<(), AppError> {
        tracing::trace!(entry = name, size = contents.len(), "archive: adding entry");
        self.writer.start_file(name, self.options)?;
        self.writer.write_all(contents)?;
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>, AppError> {
        Ok(self.writer.finish()?.into_inner())
    }
}
