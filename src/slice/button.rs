use anyhow::Result;
use image::{DynamicImage, GenericImageView};

use super::{NamedImage, NamedRect, crop_region};
use crate::error::SlicerError;
use crate::geometry::Rect;

/// Side of a corner piece in pixels
pub const DEFAULT_CORNER_SIZE: u32 = 10;

/// Names of the eight border pieces, in output order
pub const BUTTON_PARTS: [&str; 8] = [
    "top_left",
    "bottom_left",
    "top_right",
    "bottom_right",
    "horizontal_top",
    "horizontal_bottom",
    "vertical_left",
    "vertical_right",
];

/// One border piece cut from both button states
#[derive(Debug, Clone)]
pub struct ButtonPart {
    pub name: String,
    pub normal: DynamicImage,
    pub selected: DynamicImage,
}

/// Compute the four corners and four 1-pixel edge strips of a 9-slice button.
///
/// Corners are `corner x corner`. Horizontal edges are `1 x corner` columns
/// taken just right of the left corners; vertical edges are `corner x 1` rows
/// taken just below the top corners. The center is not extracted.
pub fn button_regions(width: u32, height: u32, corner: u32) -> Result<Vec<NamedRect>> {
    if corner == 0 {
        return Err(SlicerError::InvalidParameter {
            name: "corner_size",
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    let min = corner
        .checked_mul(2)
        .ok_or_else(|| SlicerError::InvalidParameter {
            name: "corner_size",
            reason: format!("{corner}px corners are too large"),
        })?;
    if width < min || height < min {
        return Err(SlicerError::ImageTooSmall {
            name: "button".to_string(),
            width,
            height,
            min_width: min,
            min_height: min,
        }
        .into());
    }

    let right = width - corner;
    let bottom = height - corner;
    let rects = [
        Rect::new(0, 0, corner, corner),
        Rect::new(0, bottom, corner, corner),
        Rect::new(right, 0, corner, corner),
        Rect::new(right, bottom, corner, corner),
        Rect::new(corner, 0, 1, corner),
        Rect::new(corner, bottom, 1, corner),
        Rect::new(0, corner, corner, 1),
        Rect::new(right, corner, corner, 1),
    ];

    Ok(BUTTON_PARTS
        .iter()
        .zip(rects)
        .map(|(name, rect)| NamedRect::new(*name, rect))
        .collect())
}

/// Cut the eight border pieces out of a single button image.
pub fn split_button(image: &DynamicImage, corner: u32) -> Result<Vec<NamedImage>> {
    let (width, height) = image.dimensions();
    button_regions(width, height, corner)?
        .into_iter()
        .map(|region| {
            let cropped = crop_region(image, &region.name, region.rect)?;
            Ok(NamedImage {
                name: region.name,
                image: cropped,
            })
        })
        .collect()
}

/// Cut the same eight pieces out of the normal and selected button states.
///
/// Both images must have the same dimensions.
pub fn split_button_pair(
    normal: &DynamicImage,
    selected: &DynamicImage,
    corner: u32,
) -> Result<Vec<ButtonPart>> {
    let (normal_width, normal_height) = normal.dimensions();
    let (selected_width, selected_height) = selected.dimensions();
    if (normal_width, normal_height) != (selected_width, selected_height) {
        return Err(SlicerError::DimensionMismatch {
            normal_width,
            normal_height,
            selected_width,
            selected_height,
        }
        .into());
    }

    button_regions(normal_width, normal_height, corner)?
        .into_iter()
        .map(|region| {
            Ok(ButtonPart {
                normal: crop_region(normal, &region.name, region.rect)?,
                selected: crop_region(selected, &region.name, region.rect)?,
                name: region.name,
            })
        })
        .collect()
}
