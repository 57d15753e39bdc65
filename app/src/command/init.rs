use sift_config::Config;

/// Strategy for writing the default configuration to `~/sift/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;
        println!("Config written to {}", path.display());
        Ok(())
    }
}
