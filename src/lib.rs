pub mod config;
pub mod fetcher;
pub mod models;
pub mod probe;
