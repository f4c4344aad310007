use anyhow::Result;
use mediscan::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
