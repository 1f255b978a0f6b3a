use crate::core::data::view_state::ViewState;

/// Bounds every target view is clamped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub zoom_floor: f64,
    pub plane_min: f64,
    pub plane_max: f64,
    pub scroll_zoom_factor: f64,
}

impl ViewLimits {
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if zoom.is_finite() {
            zoom.max(self.zoom_floor)
        } else {
            self.zoom_floor
        }
    }

    #[must_use]
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_finite() {
            offset.clamp(self.plane_min, self.plane_max)
        } else {
            0.0_f64.clamp(self.plane_min, self.plane_max)
        }
    }

    #[must_use]
    pub fn clamp(&self, view: ViewState) -> ViewState {
        ViewState {
            zoom: self.clamp_zoom(view.zoom),
            offset_x: self.clamp_offset(view.offset_x),
            offset_y: self.clamp_offset(view.offset_y),
        }
    }
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            zoom_floor: 1.0,
            plane_min: -2.0,
            plane_max: 2.0,
            scroll_zoom_factor: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Fraction of the remaining distance covered per second of tick time.
    pub smoothing_rate: f64,
    pub epsilon: f64,
}

impl AnimationSettings {
    /// Interpolation factor for a tick of `dt` seconds.
    #[must_use]
    pub fn step_factor(&self, dt: f64) -> f64 {
        let safe_dt = if dt.is_finite() { dt } else { 0.0 };
        (safe_dt * self.smoothing_rate).clamp(0.0, 1.0)
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            smoothing_rate: 0.5,
            epsilon: 1e-4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = ViewLimits::default();

        assert!(limits.zoom_floor > 0.0);
        assert!(limits.plane_min < limits.plane_max);
        assert!(limits.scroll_zoom_factor > 1.0);
    }

    #[test]
    fn zoom_never_drops_below_floor() {
        let limits = ViewLimits::default();

        assert_eq!(limits.clamp_zoom(0.25), 1.0);
        assert_eq!(limits.clamp_zoom(8.0), 8.0);
        assert_eq!(limits.clamp_zoom(f64::NAN), 1.0);
    }

    #[test]
    fn offsets_are_clamped_to_plane() {
        let limits = ViewLimits::default();
        let view = limits.clamp(ViewState::new(1.0, 3.5, -7.0));

        assert_eq!(view, ViewState::new(1.0, 2.0, -2.0));
        assert_eq!(limits.clamp_offset(f64::INFINITY), 0.0);
    }

    #[test]
    fn step_factor_is_clamped() {
        let settings = AnimationSettings::default();

        assert_eq!(settings.step_factor(1.0), 0.5);
        assert_eq!(settings.step_factor(10.0), 1.0);
        assert_eq!(settings.step_factor(-1.0), 0.0);
        assert_eq!(settings.step_factor(f64::NAN), 0.0);
    }
}
