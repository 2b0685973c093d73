pub mod deps;
pub mod generate;
pub mod service;
