mod service_store;

pub use service_store::ServiceStore;
