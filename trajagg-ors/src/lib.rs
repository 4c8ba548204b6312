pub mod fetch;
pub mod service;
