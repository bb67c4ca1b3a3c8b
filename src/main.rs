use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webp_batcher::converter::BatchConverter;
use webp_batcher::models::ConversionSettings;

const INPUT_DIR: &str = "input";
const OUTPUT_DIR: &str = "output";
const WEBP_QUALITY: u8 = 50;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webp_batcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create both trees up front so a first run against an empty checkout
    // leaves the expected layout behind.
    fs::create_dir_all(INPUT_DIR)?;
    fs::create_dir_all(OUTPUT_DIR)?;

    let settings = ConversionSettings {
        quality: WEBP_QUALITY,
        ..ConversionSettings::default()
    };

    info!(
        "Converting {} -> {} at quality {} ({}x{})",
        INPUT_DIR, OUTPUT_DIR, settings.quality, settings.target_width, settings.target_height
    );

    let converter = BatchConverter::new(Path::new(INPUT_DIR), Path::new(OUTPUT_DIR), settings);

    // Per-file failures are already logged and counted inside the run; only
    // a mirror-directory creation failure aborts.
    match converter.run() {
        Ok(summary) => {
            info!(
                "Conversion finished: {} converted, {} failed",
                summary.converted, summary.failed
            );
            Ok(())
        }
        Err(e) => {
            error!("Conversion aborted: {}", e);
            std::process::exit(1);
        }
    }
}
