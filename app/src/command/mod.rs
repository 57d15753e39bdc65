//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use sift_config::{Config, StorageBackend};
use sift_store::{AnalyzedStringRepo, DatabaseStore, MemoryStore, StringService};
use std::sync::Arc;
use tracing::info;

mod analyze;
mod init;
mod serve;
mod version;

pub use analyze::AnalyzeStrategy;
pub use init::InitStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Build the string service over the configured storage backend.
async fn build_service(config: &Config) -> anyhow::Result<StringService> {
    let repo: Arc<dyn AnalyzedStringRepo> = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::Database => {
            info!("Using database storage");
            Arc::new(DatabaseStore::new(&config.storage.url).await?)
        }
    };

    Ok(StringService::new(repo).with_max_value_length(config.limits.max_value_length))
}

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
