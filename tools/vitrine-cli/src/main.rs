//! Vitrine CLI - Browse the demo catalog from the terminal.
//!
//! Commands:
//! - `vitrine list` - List products with category filters and sorting
//! - `vitrine show` - Show one product's detail view
//! - `vitrine categories` - List the filterable categories

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ListArgs, ShowArgs};

/// Vitrine - Browse the product catalog
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered and sorted
    List(ListArgs),

    /// Show one product's detail view
    Show(ShowArgs),

    /// List the filterable categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.json);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &output).await,
        Commands::Show(args) => commands::show::run(args, &output).await,
        Commands::Categories => commands::categories::run(&output).await,
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
