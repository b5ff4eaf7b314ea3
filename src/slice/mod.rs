mod button;
mod cells;
mod minimap;
mod region;

use image::DynamicImage;

use crate::geometry::Rect;

pub use button::{
    BUTTON_PARTS, ButtonPart, DEFAULT_CORNER_SIZE, button_regions, split_button, split_button_pair,
};
pub use cells::{DEFAULT_CELL_WIDTH, cell_regions, default_cell_names, split_cells};
pub use minimap::{INTERIOR_INSET, MinimapParams, remake_minimap};
pub use region::{crop_region, ensure_within, view_region};

/// A crop region paired with the name used to build its output file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRect {
    pub name: String,
    pub rect: Rect,
}

impl NamedRect {
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
        }
    }
}

/// A cropped image ready to be written out under `name`
#[derive(Debug, Clone)]
pub struct NamedImage {
    pub name: String,
    pub image: DynamicImage,
}
