use clap::Parser;
use prompt_library::cli::Cli;
use prompt_library::commands;
use prompt_library::core::storage::AppCtx;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let ctx = AppCtx::init()?;
    commands::dispatch(cli.command, &ctx).await
}
