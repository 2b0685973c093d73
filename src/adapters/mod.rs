//! Infrastructure implementations of the ports.

pub mod json_file_service_store;
pub mod memory_service_store;
mod store_state;

pub use json_file_service_store::JsonFileServiceStore;
pub use memory_service_store::MemoryServiceStore;
