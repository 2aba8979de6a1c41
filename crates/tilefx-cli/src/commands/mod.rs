//! CLI command implementations

pub mod generate;
pub mod info;
pub mod process;

use anyhow::{Context, Result};
use std::path::Path;
use tilefx_core::ImageBuffer;

/// Load a PPM image from path
pub fn load_image(path: &Path) -> Result<ImageBuffer> {
    tilefx_io::ppm::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a PPM image to path
pub fn save_image(path: &Path, image: &ImageBuffer) -> Result<()> {
    tilefx_io::ppm::write(path, image)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
