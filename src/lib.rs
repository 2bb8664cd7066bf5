//! Squad board client library
//!
//! Fetches players, fixtures and match statistics from the team management
//! API and renders them into an owned HTML document model.
//!
//! # Examples
//!
//! ```rust,no_run
//! use squad_board::config::Config;
//! use squad_board::data_fetcher::HttpTeamApi;
//! use squad_board::error::AppError;
//! use squad_board::ui::ViewController;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let controller = ViewController::new(HttpTeamApi::from_config(&config)?);
//!
//!     controller.page_load().await;
//!     controller.select_match("3").await;
//!
//!     print!("{}", controller.document().await.render_html());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod testing_utils;
pub mod ui;
pub mod view;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{HttpTeamApi, TeamApi};
pub use error::AppError;
pub use ui::ViewController;
pub use view::Document;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
