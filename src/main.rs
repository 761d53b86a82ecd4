use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .finish(),
    )?;
    let summary = oximeta::run_from_env().await?;
    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} DICOM files could not be converted",
            summary.failed,
            summary.failed + summary.converted
        )
    }
    Ok(())
}
