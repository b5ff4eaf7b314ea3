use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::Rect;

#[derive(Error, Debug)]
pub enum SlicerError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Region '{name}' {rect} lies outside the {width}x{height} source image")]
    RegionOutOfBounds {
        name: String,
        rect: Rect,
        width: u32,
        height: u32,
    },

    #[error("Region '{name}' is empty or inverted: ({left},{top})-({right},{bottom})")]
    InvalidRegion {
        name: String,
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    },

    #[error(
        "Strip of width {width} holds {found} tiles of {tile_width}px, but {expected} were expected"
    )]
    TileCountMismatch {
        width: u32,
        tile_width: u32,
        found: u32,
        expected: u32,
    },

    #[error(
        "Image '{name}' ({width}x{height}) is smaller than the required {min_width}x{min_height}"
    )]
    ImageTooSmall {
        name: String,
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error(
        "Button images differ in size: normal is {normal_width}x{normal_height}, \
         selected is {selected_width}x{selected_height}"
    )]
    DimensionMismatch {
        normal_width: u32,
        normal_height: u32,
        selected_width: u32,
        selected_height: u32,
    },

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Unsupported config version {0} (expected 1)")]
    UnsupportedConfigVersion(u32),
}
