use crate::batch::{BatchSummary, run_batch};
use crate::config::get_config;
use crate::settings::OximetaEnvOptions;

/// Calls [run_batch] using configuration from environment variables.
pub async fn run_from_env() -> anyhow::Result<BatchSummary> {
    let settings: OximetaEnvOptions = get_config().extract()?;
    run_with_settings(settings).await
}

pub async fn run_with_settings(settings: OximetaEnvOptions) -> anyhow::Result<BatchSummary> {
    let output_dir = settings.output_dir();
    let config = settings.json_config();
    let summary = run_batch(settings.source_dir, output_dir, config, settings.threads).await?;
    Ok(summary)
}
