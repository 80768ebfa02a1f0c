use std::path::Path;

use anyhow::Context;

use crate::{
    config::Config,
    evaluation::{evaluate, Evaluation},
    extraction::{extract_senses, Extractor},
    senses::Sense,
    utils::files::read_lossy,
};

/// Read an answers file and extract its senses
pub async fn load_senses<E: Extractor + ?Sized>(
    path: &Path,
    extractor: &E,
) -> anyhow::Result<Vec<Sense>> {
    let content = read_lossy(path)
        .await
        .with_context(|| format!("Unable to read answers file {}", path.display()))?;

    let senses = extract_senses(&content, extractor)
        .map_err(|e| anyhow!("Unable to extract senses from {}: {}", path.display(), e))?;

    log::info!("Read {} senses from {}", senses.len(), path.display());

    Ok(senses)
}

/// Load the predicted and gold answers named by the config and score them
pub async fn score(config: &Config) -> anyhow::Result<Evaluation> {
    let extractor = config.strategy.extractor(&config.attribute);

    log::debug!(
        "Extracting with the {} strategy, majority sense {}",
        config.strategy,
        config.majority
    );

    let predicted = load_senses(&config.predicted_path(), &extractor).await?;
    let gold = load_senses(&config.gold_path(), &extractor).await?;

    let evaluation = evaluate(&predicted, &gold, config.majority).with_context(|| {
        format!(
            "Unable to score {} against {}",
            config.predicted_path().display(),
            config.gold_path().display()
        )
    })?;

    Ok(evaluation)
}
