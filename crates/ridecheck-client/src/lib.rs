mod client;
mod config;

pub use client::HttpIngestClient;
pub use config::IngestConfig;
