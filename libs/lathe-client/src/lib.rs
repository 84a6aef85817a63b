pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod render;

pub use client::LatheClient;
pub use config::ClientConfig;
pub use error::ClientError;
