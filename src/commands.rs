use crate::cli::Args;
use squad_board::config::Config;
use squad_board::data_fetcher::{HttpTeamApi, TeamApi};
use squad_board::error::AppError;
use squad_board::ui::ViewController;
use squad_board::view::{Document, PlayerForm};
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_url) = &args.new_api_url {
        config.api_base_url = new_url.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Configuration saved to {config_path}");
    Ok(())
}

/// Fills the player form from the --add-player flags, if given.
pub fn player_form_from_args(args: &Args) -> Option<PlayerForm> {
    let name = args.add_player.clone()?;
    Some(PlayerForm {
        name,
        age: args.age.clone().unwrap_or_default(),
        date_of_birth: args.dob.clone().unwrap_or_default(),
        position: args.position.clone().unwrap_or_default(),
        jersey_number: args.jersey.clone().unwrap_or_default(),
    })
}

/// Drives one session of the page: load, optional player creation,
/// optional single-player view and optional match selection.
pub async fn run_page<A: TeamApi>(api: A, args: &Args) -> Document {
    let controller = ViewController::new(api);

    controller.page_load().await;

    if let Some(form) = player_form_from_args(args) {
        controller.document().await.player_form = form;
        controller.create_player().await;
    }

    if let Some(player_id) = args.player_id {
        controller.show_player(player_id).await;
    }

    if let Some(match_id) = &args.match_id {
        controller.select_match(match_id).await;
    }

    controller.into_document()
}

/// Renders the page against the configured API and writes it out.
/// Alerts go to stderr.
pub async fn handle_render_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let api = HttpTeamApi::from_config(config)?;
    info!("Using API at {}", api.api_base_url());

    let document = run_page(api, args).await;

    for alert in document.alerts() {
        eprintln!("{alert}");
    }

    let html = document.render_html();
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, html).await?;
            info!("Page written to {path}");
        }
        None => print!("{html}"),
    }

    Ok(())
}
