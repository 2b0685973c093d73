//! Archive generation commands over stored services.

use crate::app::AppContext;
use crate::domain::{AppError, ServiceConfig};
use crate::ports::ServiceStore;
use crate::services::{ProjectArchiver, archive_file_name};

/// File name used for the batch archive.
pub const BATCH_ARCHIVE_NAME: &str = "microservices.zip";

/// Archive bytes together with the file name they should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub fn generate<S: ServiceStore>(
    ctx: &AppContext<S>,
    id: u64,
) -> Result<GeneratedArchive, AppError> {
    let service = ctx.store().require(id)?;
    let bytes = ProjectArchiver::generate(&service.config)?;
    Ok(GeneratedArchive { file_name: archive_file_name(&service.config), bytes })
}

/// Generate every stored service into one archive, in id order.
pub fn generate_all<S: ServiceStore>(ctx: &AppContext<S>) -> Result<GeneratedArchive, AppError> {
    let configs: Vec<ServiceConfig> =
        ctx.store().list()?.into_iter().map(|service| service.config).collect();
    if configs.is_empty() {
        return Err(AppError::NoServices);
    }
    let bytes = ProjectArchiver::generate_all(&configs)?;
    Ok(GeneratedArchive { file_name: BATCH_ARCHIVE_NAME.to_string(), bytes })
}
