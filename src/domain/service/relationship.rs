use serde::{Deserialize, Serialize};

/// Directed link between two stored services.
///
/// Carried with a service definition for architecture views; never rendered
/// into generated projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub source_service_id: u64,
    pub target_service_id: u64,
    /// Free-form transport label such as `REST`, `gRPC` or `Message Queue`.
    pub communication_type: String,
}

impl Relationship {
    pub fn new(source: u64, target: u64, communication_type: impl Into<String>) -> Self {
        Self {
            source_service_id: source,
            target_service_id: target,
            communication_type: communication_type.into(),
        }
    }
}
