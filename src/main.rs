use clap::Parser;
use price_machine::utils::error::{CatalogError, ErrorSeverity};
use price_machine::utils::logger;
use price_machine::{Catalog, CliConfig, Session};
use std::io;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting price-machine");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ price-machine failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(&e));
    }
}

fn run(config: &CliConfig) -> price_machine::Result<()> {
    let settings = config.settings()?;
    let options = settings.load_options()?;

    let mut catalog = Catalog::new();
    catalog.load_with(&settings.directory, &options)?;

    let stdin = io::stdin();
    let session = Session::new(&catalog, &settings.output);
    session.run(stdin.lock(), io::stdout())?;

    Ok(())
}

fn exit_code(error: &CatalogError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
