use anyhow::Result;
use image::{RgbaImage, imageops};
use log::{debug, warn};

use super::view_region;
use crate::error::SlicerError;
use crate::geometry::Rect;

/// Pixels skipped on every side of a source tile when taking its interior
pub const INTERIOR_INSET: u32 = 3;

/// Parameters for rebuilding a minimap strip with smaller bordered tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapParams {
    /// Side of a square source tile. `None` uses the strip height.
    pub tile_size: Option<u32>,
    /// Side of a square output tile (even)
    pub output_tile_size: u32,
    /// Number of tiles the strip is expected to hold
    pub tile_count: u32,
}

impl Default for MinimapParams {
    fn default() -> Self {
        Self {
            tile_size: None,
            output_tile_size: 20,
            tile_count: 12,
        }
    }
}

/// A 1-pixel border sample copied from a source tile into an output tile
struct BorderPiece {
    name: &'static str,
    source: Rect,
    dest_x: u32,
    dest_y: u32,
}

/// Rebuild a horizontal strip of square minimap tiles at a smaller size.
///
/// Each output tile keeps the 1-pixel border of its source tile (left and
/// right columns split into top and bottom halves, top and bottom rows minus
/// the corners) and receives the source interior, inset by
/// [`INTERIOR_INSET`], pasted at `(1, 1)` without resizing. The interior is
/// clipped to the inner area of the output tile so it never covers the border.
pub fn remake_minimap(sheet: &RgbaImage, params: &MinimapParams) -> Result<RgbaImage> {
    let (width, height) = sheet.dimensions();
    let tile_size = params.tile_size.unwrap_or(height);
    let out_size = params.output_tile_size;
    validate_params(tile_size, params)?;

    if height < tile_size {
        return Err(SlicerError::ImageTooSmall {
            name: "minimap strip".to_string(),
            width,
            height,
            min_width: tile_size * params.tile_count,
            min_height: tile_size,
        }
        .into());
    }

    let found = width / tile_size;
    if found != params.tile_count {
        return Err(SlicerError::TileCountMismatch {
            width,
            tile_width: tile_size,
            found,
            expected: params.tile_count,
        }
        .into());
    }
    if width % tile_size != 0 {
        warn!(
            "Ignoring {} trailing columns after the last whole {}px tile",
            width % tile_size,
            tile_size
        );
    }

    let interior = tile_size - 2 * INTERIOR_INSET;
    let inner = out_size - 2;
    if interior != inner {
        warn!(
            "Tile interior is {interior}x{interior} but output tiles hold {inner}x{inner}; \
             pasting without resizing"
        );
    }

    let mut strip = RgbaImage::new(out_size * params.tile_count, out_size);
    for i in 0..params.tile_count {
        let bounds = Rect::new(i * tile_size, 0, tile_size, tile_size);
        let tile = view_region(sheet, &format!("tile {i}"), bounds)?.to_image();
        let remade = remake_tile(&tile, out_size)?;
        imageops::replace(&mut strip, &remade, i64::from(i * out_size), 0);
        debug!("Remade tile {} from {}", i, bounds);
    }

    Ok(strip)
}

fn validate_params(tile_size: u32, params: &MinimapParams) -> Result<()> {
    let out_size = params.output_tile_size;
    if out_size < 4 || out_size % 2 != 0 {
        return Err(SlicerError::InvalidParameter {
            name: "output_tile_size",
            reason: format!("must be an even number of at least 4, got {out_size}"),
        }
        .into());
    }
    if params.tile_count == 0 {
        return Err(SlicerError::InvalidParameter {
            name: "tile_count",
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    if tile_size < out_size {
        return Err(SlicerError::InvalidParameter {
            name: "tile_size",
            reason: format!(
                "source tiles ({tile_size}px) must be at least as large as output tiles ({out_size}px)"
            ),
        }
        .into());
    }
    if tile_size <= 2 * INTERIOR_INSET {
        return Err(SlicerError::InvalidParameter {
            name: "tile_size",
            reason: format!("{tile_size}px tiles leave no interior inside a {INTERIOR_INSET}px inset"),
        }
        .into());
    }
    // Both strip widths must be representable
    for (name, size) in [("tile_size", tile_size), ("output_tile_size", out_size)] {
        if size.checked_mul(params.tile_count).is_none() {
            return Err(SlicerError::InvalidParameter {
                name,
                reason: format!(
                    "{} tiles of {size}px overflow the strip width",
                    params.tile_count
                ),
            }
            .into());
        }
    }
    Ok(())
}

fn border_pieces(size: u32, out_size: u32) -> [BorderPiece; 6] {
    let half = out_size / 2;
    let last = out_size - 1;
    [
        BorderPiece {
            name: "left edge, top half",
            source: Rect::new(0, 0, 1, half),
            dest_x: 0,
            dest_y: 0,
        },
        BorderPiece {
            name: "left edge, bottom half",
            source: Rect::new(0, size - half, 1, half),
            dest_x: 0,
            dest_y: half,
        },
        BorderPiece {
            name: "right edge, top half",
            source: Rect::new(size - 1, 0, 1, half),
            dest_x: last,
            dest_y: 0,
        },
        BorderPiece {
            name: "right edge, bottom half",
            source: Rect::new(size - 1, size - half, 1, half),
            dest_x: last,
            dest_y: half,
        },
        BorderPiece {
            name: "top edge",
            source: Rect::new(1, 0, out_size - 2, 1),
            dest_x: 1,
            dest_y: 0,
        },
        BorderPiece {
            name: "bottom edge",
            source: Rect::new(1, size - 1, out_size - 2, 1),
            dest_x: 1,
            dest_y: last,
        },
    ]
}

fn remake_tile(tile: &RgbaImage, out_size: u32) -> Result<RgbaImage> {
    let size = tile.width();
    let mut out = RgbaImage::new(out_size, out_size);

    for piece in border_pieces(size, out_size) {
        let view = view_region(tile, piece.name, piece.source)?;
        imageops::replace(
            &mut out,
            &*view,
            i64::from(piece.dest_x),
            i64::from(piece.dest_y),
        );
    }

    let far = size - INTERIOR_INSET;
    let interior = Rect::from_corners(INTERIOR_INSET, INTERIOR_INSET, far, far).ok_or_else(|| {
        SlicerError::InvalidRegion {
            name: "interior".to_string(),
            left: INTERIOR_INSET,
            top: INTERIOR_INSET,
            right: far,
            bottom: far,
        }
    })?;

    // Keep the interior off the border row and column
    let inner = out_size - 2;
    let clipped = Rect::new(
        interior.x,
        interior.y,
        interior.width.min(inner),
        interior.height.min(inner),
    );
    let view = view_region(tile, "interior", clipped)?;
    imageops::replace(&mut out, &*view, 1, 1);

    Ok(out)
}
