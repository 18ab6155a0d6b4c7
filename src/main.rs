//! Embedrank entrypoint.

use std::sync::Arc;

use mimalloc::MiMalloc;

use embedrank::config::Config;
use embedrank::evaluation::Evaluation;
use embedrank::report::{NameColumn, save_report};
use embedrank::similarity::{CachedSimilarity, EncoderSimilarity};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dry_run = std::env::args().any(|arg| arg == "--dry-run");

    let config = Config::from_env()?;
    config.validate()?;
    let mut roster = config.roster()?;

    tracing::info!(
        models = roster.models.len(),
        criteria = roster.criteria.len(),
        output = %config.output_path.display(),
        "Embedrank starting"
    );

    let registry = match &config.models_dir {
        Some(dir) if !dry_run => {
            let (registry, failures) =
                EncoderSimilarity::load(dir, &roster.models, config.max_seq_len);
            if !failures.is_empty() {
                roster
                    .models
                    .retain(|m| !failures.iter().any(|f| f.model.id == m.id));
                tracing::warn!(
                    skipped = failures.len(),
                    remaining = roster.models.len(),
                    "Some models could not be loaded and are excluded from the ranking"
                );
            }
            registry
        }
        _ => {
            tracing::warn!(dry_run, "Using stub encoders");
            EncoderSimilarity::stub(&roster.models, config.max_seq_len)?
        }
    };

    if roster.models.is_empty() {
        anyhow::bail!("no models available to rank");
    }

    let provider = Arc::new(CachedSimilarity::with_capacity(
        registry,
        config.cache_capacity,
    ));
    let evaluation = Evaluation::new(roster.models, roster.criteria, provider);
    let outcome = evaluation.run_concurrent().await?;

    save_report(
        &config.output_path,
        &outcome.ranked,
        config.output_format,
        NameColumn::Identifier,
    )?;

    tracing::info!("Embedrank complete");
    Ok(())
}
