#[cfg(feature = "cli")]
pub mod cli;
pub mod project_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use project_config::ProjectConfig;
