use std::collections::HashSet;

use anyhow::Result;
use image::{DynamicImage, GenericImageView};
use log::warn;

use super::{NamedImage, NamedRect, crop_region};
use crate::error::SlicerError;
use crate::geometry::Rect;

/// Width of one minimap cell in the source strip
pub const DEFAULT_CELL_WIDTH: u32 = 20;

/// Cell names in strip order: open, the eight neighbour counts, then hide, flag and mine
pub fn default_cell_names() -> Vec<String> {
    std::iter::once("open".to_string())
        .chain((1..=8).map(|n| n.to_string()))
        .chain(["hide", "flag", "mine"].map(String::from))
        .collect()
}

/// Compute one full-height region per name, left to right.
///
/// A strip too narrow for every name is reported when the first missing
/// cell is cropped; a strip with more whole cells than names is rejected here.
pub fn cell_regions(
    width: u32,
    height: u32,
    cell_width: u32,
    names: &[String],
) -> Result<Vec<NamedRect>> {
    if cell_width == 0 {
        return Err(SlicerError::InvalidParameter {
            name: "cell_width",
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    if names.is_empty() {
        return Err(SlicerError::InvalidParameter {
            name: "names",
            reason: "at least one cell name is required".to_string(),
        }
        .into());
    }

    let mut seen = HashSet::new();
    if let Some(dup) = names.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(SlicerError::InvalidParameter {
            name: "names",
            reason: format!("'{dup}' appears more than once"),
        }
        .into());
    }

    let expected = u32::try_from(names.len()).map_err(|_e| SlicerError::InvalidParameter {
        name: "names",
        reason: format!("{} names is too many", names.len()),
    })?;
    if cell_width.checked_mul(expected).is_none() {
        return Err(SlicerError::InvalidParameter {
            name: "cell_width",
            reason: format!("{expected} cells of {cell_width}px overflow the strip width"),
        }
        .into());
    }

    let found = width / cell_width;
    if found > expected {
        return Err(SlicerError::TileCountMismatch {
            width,
            tile_width: cell_width,
            found,
            expected,
        }
        .into());
    }
    if found == expected && width % cell_width != 0 {
        warn!(
            "Ignoring {} trailing columns after the last {}px cell",
            width % cell_width,
            cell_width
        );
    }

    Ok(names
        .iter()
        .zip(0u32..)
        .map(|(name, i)| {
            NamedRect::new(name.clone(), Rect::new(i * cell_width, 0, cell_width, height))
        })
        .collect())
}

/// Split a horizontal strip into one image per named cell.
pub fn split_cells(
    sheet: &DynamicImage,
    cell_width: u32,
    names: &[String],
) -> Result<Vec<NamedImage>> {
    let (width, height) = sheet.dimensions();
    cell_regions(width, height, cell_width, names)?
        .into_iter()
        .map(|region| {
            let image = crop_region(sheet, &region.name, region.rect)?;
            Ok(NamedImage {
                name: region.name,
                image,
            })
        })
        .collect()
}
