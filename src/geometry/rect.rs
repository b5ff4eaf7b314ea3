use std::fmt;

/// An axis-aligned pixel region. `right()` and `bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from a `(left, top, right, bottom)` box.
    ///
    /// Returns `None` if the box is empty or inverted.
    pub fn from_corners(left: u32, top: u32, right: u32, bottom: u32) -> Option<Self> {
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self::new(left, top, right - left, bottom - top))
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    #[cfg(test)]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check if this rectangle intersects with another
    #[cfg(test)]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check if this rectangle lies inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= width && b <= height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.x,
            self.y,
            self.right(),
            self.bottom()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        let c = Rect::new(20, 20, 10, 10);
        let touching = Rect::new(10, 0, 10, 10);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn test_from_corners() {
        let rect = Rect::from_corners(3, 3, 17, 17).unwrap();
        assert_eq!(rect, Rect::new(3, 3, 14, 14));
        assert_eq!(rect.right(), 17);
        assert_eq!(rect.bottom(), 17);

        assert!(Rect::from_corners(5, 0, 5, 10).is_none());
        assert!(Rect::from_corners(0, 8, 10, 4).is_none());
    }

    #[test]
    fn test_fits_within() {
        assert!(Rect::new(220, 0, 20, 20).fits_within(240, 20));
        assert!(!Rect::new(230, 0, 20, 20).fits_within(240, 20));
        assert!(!Rect::new(0, 0, 20, 21).fits_within(240, 20));
        assert!(!Rect::new(u32::MAX, 0, 2, 1).fits_within(240, 20));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(10, 0, 1, 10).to_string(), "(10,0)-(11,10)");
    }
}
