use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// A non-empty, axis-aligned block of surface pixels.
///
/// `right()` and `bottom()` are exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelRect {
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn left(&self) -> u32 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> u32 {
        self.top
    }

    #[must_use]
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.left <= x && x < self.right() && self.top <= y && y < self.bottom()
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let rect = PixelRect::new(10, 20, 30, 40).unwrap();

        assert_eq!(rect.left(), 10);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.size(), 1200);
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        assert_eq!(
            PixelRect::new(0, 0, 0, 10),
            Err(PixelRectError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            PixelRect::new(0, 0, 10, 0),
            Err(PixelRectError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_single_pixel_rect_is_valid() {
        let rect = PixelRect::new(3, 3, 1, 1).unwrap();

        assert!(rect.contains(3, 3));
        assert!(!rect.contains(4, 3));
        assert!(!rect.contains(3, 4));
    }

    #[test]
    fn test_pixel_rect_contains_is_half_open() {
        let rect = PixelRect::new(0, 0, 100, 50).unwrap();

        assert!(rect.contains(0, 0));
        assert!(rect.contains(99, 49));
        assert!(!rect.contains(100, 0));
        assert!(!rect.contains(0, 50));
    }

    #[test]
    fn test_adjacent_rects_do_not_intersect() {
        let left = PixelRect::new(0, 0, 10, 10).unwrap();
        let right = PixelRect::new(10, 0, 10, 10).unwrap();
        let below = PixelRect::new(0, 10, 10, 10).unwrap();
        let overlapping = PixelRect::new(5, 5, 10, 10).unwrap();

        assert!(!left.intersects(&right));
        assert!(!left.intersects(&below));
        assert!(left.intersects(&overlapping));
        assert!(overlapping.intersects(&right));
    }
}
