pub mod project_archiver;

pub use project_archiver::{ARCHIVE_EXTENSION, ProjectArchiver, archive_file_name};
