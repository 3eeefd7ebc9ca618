use clap::Parser;
use project_generations::utils::error::GenerationsError;
use project_generations::utils::{logger, validation::Validate};
use project_generations::{CliConfig, ProjectConfig, Report};

fn fail(error: GenerationsError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", error, error.category());
    tracing::error!("💡 Suggestion: {}", error.recovery_suggestion());
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(error.category().exit_code());
}

fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting project-generations");
    tracing::debug!("CLI config: {:?}", args);

    if let Err(e) = args.validate() {
        fail(e);
    }
    let format = args.output_format().unwrap_or_else(|e| fail(e));

    tracing::info!("📁 Loading project from: {}", args.config);
    let config = ProjectConfig::from_file(&args.config).unwrap_or_else(|e| fail(e));
    if let Err(e) = config.validate() {
        fail(e);
    }

    let mut info = config.to_generations_info();
    info.compute_support_policy_dates(&config.policy);
    tracing::info!(
        "✅ Computed support dates for {} generation(s) of {}",
        info.len(),
        config.project_name()
    );

    let rendered = Report::new(config.project_name(), &info)
        .render(format)
        .unwrap_or_else(|e| fail(e));

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &rendered) {
                fail(e.into());
            }
            tracing::info!("📁 Report saved to: {}", path);
        }
        None => print!("{}", rendered),
    }
}
