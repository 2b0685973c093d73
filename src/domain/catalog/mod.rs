//! Dependency catalog: identifier lookups, manifest fragments, and listing metadata.

pub mod coordinate;
pub mod dependency_id;
pub mod listing;

pub use coordinate::{Coordinate, Scope, TEST_STARTER};
pub use dependency_id::{DependencyId, DependencySet};
pub use listing::{CatalogEntry, DependencyGroup};

use crate::domain::service::BuildSystem;

/// Manifest fragment a dependency identifier contributes for a build system.
///
/// Returns `None` for unknown identifiers and for identifiers that only
/// influence other renderers; lookups never fail.
pub fn fragment_for(dependency_id: &str, build_system: BuildSystem) -> Option<String> {
    DependencyId::from_id(dependency_id)
        .and_then(|dep| dep.coordinate())
        .map(|coordinate| coordinate.fragment(build_system))
}
