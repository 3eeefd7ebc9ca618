pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::ProjectConfig;
pub use crate::core::policy::TermPolicy;
pub use crate::core::report::{OutputFormat, Report};
pub use crate::domain::generations::GenerationsInfo;
pub use crate::domain::model::{Generation, GenerationName, SupportPeriod, SupportTimeline};
pub use crate::domain::ports::SupportPolicy;
pub use crate::utils::error::{GenerationsError, Result};
