use anyhow::{Context, Result};
use petra_site::config::Config;
use petra_site::i18n::{DictionaryValidator, Key, LanguageRegistry};
use petra_site::server;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (absent in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("petra_site=info".parse()?),
        )
        .init();

    info!("Starting Petra site server");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Check the dictionary before serving anything
    let report = DictionaryValidator::validate();
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    let report = report
        .into_result(config.strict_translations)
        .context("Refusing to start with an invalid dictionary")?;
    info!(
        keys = Key::ALL.len(),
        warnings = report.warnings.len(),
        "Dictionary validated"
    );

    for entry in LanguageRegistry::get().list_enabled() {
        let language = entry.language;
        info!(
            code = language.code(),
            name = language.name(),
            direction = %language.direction(),
            default = language.is_default(),
            "Serving language"
        );
    }

    server::serve(config).await
}
