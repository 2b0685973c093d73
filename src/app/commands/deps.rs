//! Dependency catalog listing.

use crate::domain::catalog::listing;
use crate::domain::{AppError, CatalogEntry, DependencyGroup};

/// Catalog entries, optionally restricted to one group (matched case-insensitively).
pub fn list(group: Option<&str>) -> Result<Vec<&'static CatalogEntry>, AppError> {
    match group {
        None => Ok(listing::entries().iter().collect()),
        Some(name) => {
            let group = DependencyGroup::from_name(name).ok_or_else(|| {
                let available: Vec<&str> =
                    DependencyGroup::ALL.iter().map(|g| g.display_name()).collect();
                AppError::config_error(format!(
                    "Unknown dependency group '{}'. Available: {}",
                    name,
                    available.join(", ")
                ))
            })?;
            Ok(listing::entries_in_group(group).collect())
        }
    }
}
