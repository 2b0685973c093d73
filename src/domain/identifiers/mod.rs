pub mod validation;

pub use validation::{validate_identifier, validate_package_name};
