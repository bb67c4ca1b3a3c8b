//! Data models and structures
//!
//! Defines the core data structures for a conversion run: the shared
//! settings, one task per discovered source file, and the run tally.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Parameters shared by every file in a run.
#[derive(Debug, Clone, Copy)]
pub struct ConversionSettings {
    /// Lossy WebP quality, 1 (smallest) to 100 (best fidelity).
    pub quality: u8,
    pub target_width: u32,
    pub target_height: u32,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            quality: 80,
            target_width: 1920,
            target_height: 1080,
        }
    }
}

/// One discovered source image and its position relative to the input root.
#[derive(Debug, Clone)]
pub struct FileTask {
    pub source: PathBuf,
    pub relative: PathBuf,
}

impl FileTask {
    pub fn new(source: &Path, input_root: &Path) -> Result<Self> {
        let relative = source
            .strip_prefix(input_root)
            .map_err(|_| {
                Error::Path(format!(
                    "{} is outside input root {}",
                    source.display(),
                    input_root.display()
                ))
            })?
            .to_path_buf();

        Ok(Self {
            source: source.to_path_buf(),
            relative,
        })
    }

    /// Mirrored destination: same relative path with a `.webp` extension.
    pub fn output_path(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.relative).with_extension("webp")
    }
}

/// Per-run tally reported when the walk completes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub converted: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_task_strips_input_root() {
        let task = FileTask::new(Path::new("/in/a/b/photo.jpg"), Path::new("/in")).unwrap();

        assert_eq!(task.source, Path::new("/in/a/b/photo.jpg"));
        assert_eq!(task.relative, Path::new("a/b/photo.jpg"));
    }

    #[test]
    fn test_file_task_rejects_path_outside_root() {
        let result = FileTask::new(Path::new("/elsewhere/photo.jpg"), Path::new("/in"));

        assert!(matches!(result, Err(Error::Path(_))));
    }

    #[test]
    fn test_output_path_replaces_extension() {
        let task = FileTask::new(Path::new("/in/a/photo.JPG"), Path::new("/in")).unwrap();

        assert_eq!(
            task.output_path(Path::new("/out")),
            Path::new("/out/a/photo.webp")
        );
    }

    #[test]
    fn test_output_path_for_file_at_root() {
        let task = FileTask::new(Path::new("/in/icon.png"), Path::new("/in")).unwrap();

        assert_eq!(
            task.output_path(Path::new("/out")),
            Path::new("/out/icon.webp")
        );
    }

    #[test]
    fn test_default_settings() {
        let settings = ConversionSettings::default();

        assert_eq!(settings.quality, 80);
        assert_eq!(settings.target_width, 1920);
        assert_eq!(settings.target_height, 1080);
    }
}
