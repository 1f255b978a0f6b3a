/// Zoom multiplier and the plane point shown at the surface centre.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ViewState {
    #[must_use]
    pub const fn new(zoom: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            zoom,
            offset_x,
            offset_y,
        }
    }

    /// True when every field is within `epsilon` of `other`.
    #[must_use]
    pub fn is_within(&self, other: &Self, epsilon: f64) -> bool {
        (self.zoom - other.zoom).abs() < epsilon
            && (self.offset_x - other.offset_x).abs() < epsilon
            && (self.offset_y - other.offset_y).abs() < epsilon
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}
