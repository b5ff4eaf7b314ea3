use anyhow::Result;
use image::{DynamicImage, GenericImageView, SubImage, imageops};

use crate::error::SlicerError;
use crate::geometry::Rect;

/// Fail with `RegionOutOfBounds` unless `rect` lies inside an image of `(width, height)`.
pub fn ensure_within((width, height): (u32, u32), name: &str, rect: Rect) -> Result<()> {
    if rect.fits_within(width, height) {
        Ok(())
    } else {
        Err(SlicerError::RegionOutOfBounds {
            name: name.to_string(),
            rect,
            width,
            height,
        }
        .into())
    }
}

/// Crop a region into a new image with the same color type as the source.
///
/// `DynamicImage::crop_imm` silently clamps to the image bounds, so the
/// region is checked first.
pub fn crop_region(image: &DynamicImage, name: &str, rect: Rect) -> Result<DynamicImage> {
    ensure_within(image.dimensions(), name, rect)?;
    Ok(image.crop_imm(rect.x, rect.y, rect.width, rect.height))
}

/// Borrow a region of an image as a view, for pasting into another buffer.
pub fn view_region<'a, I>(image: &'a I, name: &str, rect: Rect) -> Result<SubImage<&'a I>>
where
    I: GenericImageView,
{
    ensure_within(image.dimensions(), name, rect)?;
    Ok(imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, GrayAlphaImage, LumaA, Rgba, RgbaImage};

    #[test]
    fn test_crop_region_preserves_color_type() {
        let gray = GrayAlphaImage::from_fn(8, 8, |x, y| LumaA([(x * 8 + y) as u8, 200]));
        let image = DynamicImage::ImageLumaA8(gray);

        let cropped = crop_region(&image, "corner", Rect::new(4, 4, 4, 4)).unwrap();

        assert_eq!(cropped.color(), ColorType::La8);
        assert_eq!(cropped.dimensions(), (4, 4));
        assert_eq!(cropped.get_pixel(0, 0), image.get_pixel(4, 4));
    }

    #[test]
    fn test_crop_region_rejects_out_of_bounds() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(10, 10));

        let err = crop_region(&image, "overhang", Rect::new(5, 0, 6, 10)).unwrap_err();

        match err.downcast_ref::<SlicerError>() {
            Some(SlicerError::RegionOutOfBounds { name, width, .. }) => {
                assert_eq!(name, "overhang");
                assert_eq!(*width, 10);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_view_region_reads_source_pixels() {
        let image = RgbaImage::from_fn(6, 6, |x, y| Rgba([x as u8, y as u8, 0, 255]));

        let view = view_region(&image, "column", Rect::new(5, 2, 1, 3)).unwrap();

        assert_eq!(view.dimensions(), (1, 3));
        assert_eq!(view.get_pixel(0, 0), Rgba([5, 2, 0, 255]));
        assert_eq!(view.get_pixel(0, 2), Rgba([5, 4, 0, 255]));
    }
}
