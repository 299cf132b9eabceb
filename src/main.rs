use anyhow::{Context, Result};
use log::info;
use resize_worker::{
    BatchEvent, BatchProcessor, config::AppConfig, imaging::ImageCrateCodec,
    setup::initialize_logger, storage::LocalStore,
};
use std::{fs, io::Read, path::PathBuf};

/// Local invocation harness: one event in (file argument or stdin), one
/// summary out on stdout.
fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    initialize_logger(config.level_filter()?);

    let document = read_event(std::env::args_os().nth(1).map(PathBuf::from))?;
    let event = BatchEvent::from_json(&document)?;

    info!("Serving buckets from {:?}", config.storage_root);
    let processor = BatchProcessor::new(LocalStore::new(&config.storage_root), ImageCrateCodec);
    let summary = processor.process(&event).summary();

    println!(
        "{}",
        serde_json::to_string(&summary).context("failed to serialize summary")?
    );
    Ok(())
}

fn read_event(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(&path).context(format!("failed to read event file {:?}", path))
        }
        None => {
            let mut document = String::new();
            std::io::stdin()
                .read_to_string(&mut document)
                .context("failed to read event from stdin")?;
            Ok(document)
        }
    }
}
