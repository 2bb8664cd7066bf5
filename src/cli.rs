use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch configuration and no page
/// should be rendered.
pub fn is_config_command(args: &Args) -> bool {
    args.new_api_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Squad board for the team management API
///
/// Loads the player list and the fixture list, optionally adds a player and
/// shows statistics for a completed match, then prints the resulting page as HTML.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Write the rendered page to this file instead of stdout.
    #[arg(short, long, value_name = "FILE", help_heading = "Display Options")]
    pub output: Option<String>,

    /// After loading the page, select this match and show its statistics.
    #[arg(short = 'm', long = "match", value_name = "MATCH_ID", help_heading = "Display Options")]
    pub match_id: Option<String>,

    /// Show a single player instead of the full squad list.
    #[arg(long = "player", value_name = "PLAYER_ID", help_heading = "Display Options")]
    pub player_id: Option<i64>,

    /// Use this API base URL for this run only.
    #[arg(long = "api-url", value_name = "URL", help_heading = "Display Options")]
    pub api_url: Option<String>,

    /// Add a player with this name. Requires --age, --dob, --position and --jersey.
    #[arg(
        long = "add-player",
        value_name = "NAME",
        requires_all = ["age", "dob", "position", "jersey"],
        help_heading = "Add Player"
    )]
    pub add_player: Option<String>,

    /// Age of the new player.
    #[arg(long, value_name = "YEARS", requires = "add_player", help_heading = "Add Player")]
    pub age: Option<String>,

    /// Date of birth of the new player (YYYY-MM-DD).
    #[arg(long, value_name = "DATE", requires = "add_player", help_heading = "Add Player")]
    pub dob: Option<String>,

    /// Position of the new player, as a code (ST) or a name (Striker).
    #[arg(long, value_name = "POSITION", requires = "add_player", help_heading = "Add Player")]
    pub position: Option<String>,

    /// Jersey number of the new player.
    #[arg(long, value_name = "NUMBER", requires = "add_player", help_heading = "Add Player")]
    pub jersey: Option<String>,

    /// Update the API base URL in config.
    #[arg(long = "config", value_name = "API_URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
