pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod n8n;
pub mod services;

pub use config::AppConfig;
pub use error::AdapterError;
pub use models::*;
