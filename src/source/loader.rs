use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, ImageReader};
use log::debug;

use crate::error::SlicerError;

/// Load a source sheet, keeping its original color type
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(SlicerError::InputNotFound(path.to_path_buf()).into());
    }

    let img = ImageReader::open(path)
        .map_err(|e| SlicerError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SlicerError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img)
}
