//! Batch conversion of a directory tree of JPEG/PNG images to WebP.
//!
//! Walks the input root, mirrors every directory into the output root, and
//! runs the crop/resize/encode pipeline on each supported image file.
//! Per-file failures are logged and counted; the walk continues.

use crate::models::{ConversionSettings, FileTask, RunSummary};
use crate::transform;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use walkdir::WalkDir;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Stateless converter for one input tree / output tree pair.
pub struct BatchConverter {
    input_root: PathBuf,
    output_root: PathBuf,
    settings: ConversionSettings,
}

impl BatchConverter {
    pub fn new(input_root: &Path, output_root: &Path, settings: ConversionSettings) -> Self {
        Self {
            input_root: input_root.to_path_buf(),
            output_root: output_root.to_path_buf(),
            settings,
        }
    }

    /// Walk the input tree and convert every supported image.
    ///
    /// The walk is pre-order, so a directory's mirror always exists before
    /// any file inside it is written. Failure to create a mirror directory
    /// aborts the run; every other failure is contained to its file.
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::new();

        for entry in WalkDir::new(&self.input_root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                self.mirror_directory(entry.path())?;
            } else if entry.file_type().is_file() && has_supported_extension(entry.path()) {
                let task = FileTask::new(entry.path(), &self.input_root)?;
                match self.convert_file(&task) {
                    Ok(output_path) => {
                        info!(
                            "Converted and resized: {} -> {} (quality: {})",
                            task.source.display(),
                            output_path.display(),
                            self.settings.quality
                        );
                        summary.converted += 1;
                    }
                    Err(e) => {
                        error!("Failed to convert {}: {}", task.source.display(), e);
                        summary.failed += 1;
                    }
                }
            }
        }

        Ok(summary)
    }

    fn mirror_directory(&self, dir: &Path) -> Result<()> {
        let task = FileTask::new(dir, &self.input_root)?;
        fs::create_dir_all(self.output_root.join(&task.relative))?;
        Ok(())
    }

    /// Decode, crop, resize, encode, and write one file. Encoding happens
    /// fully in memory, so a failure never leaves a partial `.webp` behind.
    fn convert_file(&self, task: &FileTask) -> Result<PathBuf> {
        let img = image::open(&task.source)?;
        let resized = transform::crop_and_resize(
            &img,
            self.settings.target_width,
            self.settings.target_height,
        );
        let encoded = transform::encode_webp(&resized, self.settings.quality)?;

        let output_path = task.output_path(&self.output_root);
        fs::write(&output_path, &encoded)?;

        Ok(output_path)
    }
}
