mod schema;

pub use schema::{Config, LimitsConfig, ServerConfig, StorageBackend, StorageConfig};
