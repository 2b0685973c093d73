use crate::ports::ServiceStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ServiceStore> {
    store: S,
}

impl<S: ServiceStore> AppContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the service store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
