use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod scan;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "5000")]
        port: String,
    },
    /// Scan a directory of label photographs and write a calendar file per
    /// schedulable medication
    Scan {
        /// Directory containing label images
        #[arg(long)]
        dir: String,

        /// Output directory for .ics files (defaults to the scan directory)
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Scan { dir, out }) => {
            scan::run(&dir, out.as_deref()).await?;
        }
        None => {}
    }

    Ok(())
}
