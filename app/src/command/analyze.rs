use sift_core::AnalyzedString;
use tokio::io::AsyncReadExt;

/// Strategy for analyzing a single value without starting the server.
///
/// Prints the analyzed record as pretty JSON. With no argument the value is
/// read from stdin, minus one trailing newline.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeStrategy;

impl super::CommandStrategy for AnalyzeStrategy {
    type Input = Option<String>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let value = match input {
            Some(value) => value,
            None => read_stdin().await?,
        };

        let record = AnalyzedString::new(&value);
        println!("{}", serde_json::to_string_pretty(&record)?);
        Ok(())
    }
}

async fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(strip_newline(buf))
}

fn strip_newline(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}
