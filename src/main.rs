// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_command};
use commands::{handle_config_update_command, handle_list_config_command, handle_render_command};
use squad_board::config::Config;
use squad_board::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_command(&args) {
        return handle_config_update_command(&args).await;
    }

    let mut config = Config::load().await?;
    if let Some(api_url) = &args.api_url {
        config.api_base_url = api_url.trim().to_string();
        config.validate()?;
    }

    // Keep the guard alive until the page has been written
    let (log_file_path, _guard) = logging::setup_logging(&args, Some(&config)).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_render_command(&args, &config).await
}
