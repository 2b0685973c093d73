mod deps;
mod generate;
mod service;
