use crate::core::report::{OutputFormat, OUTPUT_FORMATS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "project-generations")]
#[command(about = "Compute support end dates for a project's generations")]
pub struct CliConfig {
    /// Path to the project TOML file
    #[arg(short, long, default_value = "project.toml")]
    pub config: String,

    /// Output format: table, csv or json
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("format", &self.format.to_ascii_lowercase(), &OUTPUT_FORMATS)
    }
}
