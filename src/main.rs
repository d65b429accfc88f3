use tokio;

// Module declarations
mod cli;
mod config;
mod markup;
mod page;
mod toc;
mod utils;
mod wiki;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
