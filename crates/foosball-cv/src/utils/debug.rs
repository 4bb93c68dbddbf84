//! Debug image sinks

use super::image::ImageUtils;
use crate::traits::DebugSink;
use crate::Result;
use anyhow::Context;
use image::{GrayImage, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDebug;

impl DebugSink for NoDebug {
    fn enabled(&self) -> bool {
        false
    }

    fn save_rgb(&self, _name: &str, _image: &RgbImage) -> Result<()> {
        Ok(())
    }

    fn save_mask(&self, _name: &str, _mask: &GrayImage) -> Result<()> {
        Ok(())
    }
}

/// Writes every image as `<dir>/<name>.png`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create debug directory: {:?}", dir))?;
        Ok(Self { dir })
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }
}

impl DebugSink for DirectorySink {
    fn save_rgb(&self, name: &str, image: &RgbImage) -> Result<()> {
        ImageUtils::save_rgb(image, self.path_for(name))
    }

    fn save_mask(&self, name: &str, mask: &GrayImage) -> Result<()> {
        ImageUtils::save_gray(mask, self.path_for(name))
    }
}
