use sift_config::Config;
use sift_server::AppState;
use std::path::PathBuf;
use tracing::info;

/// Input for the serve strategy.
#[derive(Debug, Clone)]
pub struct ServeInput {
    /// Explicit config file; `~/sift/config.json` or defaults otherwise.
    pub config: Option<PathBuf>,
    /// Port override applied after the config is loaded.
    pub port: Option<u16>,
}

/// Strategy for running the HTTP API.
///
/// Loads configuration, opens the configured store and serves until Ctrl-C.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = Config::load(input.config.as_deref())?;
        if let Some(port) = input.port {
            config.server.port = port;
        }

        info!(
            "Starting sift: backend={:?}, max_value_length={}",
            config.storage.backend, config.limits.max_value_length
        );

        let service = super::build_service(&config).await?;
        sift_server::run(AppState::new(service), &config.bind_address()).await
    }
}
