//! Transport adapters over the application layer

pub mod http;
