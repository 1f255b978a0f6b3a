use std::num::NonZeroU32;
use thiserror::Error;

use crate::core::colour_mapping::gradient::{ColourGradient, DEFAULT_GRADIENT_STOPS, GRADIENT_STOP_COUNT};
use crate::core::data::colour::Colour;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::kernel_selector::KernelSelector;
use crate::core::view::limits::{AnimationSettings, ViewLimits};

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;
pub const DEFAULT_MAX_ITERATIONS: u32 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("surface dimensions must be positive: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("max iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("zoom floor must be finite and positive, got {0}")]
    InvalidZoomFloor(f64),
    #[error("plane bounds must be finite with min < max, got [{min}, {max}]")]
    InvalidPlaneBounds { min: f64, max: f64 },
    #[error("scroll zoom factor must be finite and greater than 1, got {0}")]
    InvalidScrollFactor(f64),
    #[error("smoothing rate must be finite and positive, got {0}")]
    InvalidSmoothingRate(f64),
    #[error("convergence epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),
    #[error("initial view {0:?} lies outside the view limits")]
    InitialViewOutOfBounds(ViewState),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub gradient_stops: [Colour; GRADIENT_STOP_COUNT],
    pub limits: ViewLimits,
    pub animation: AnimationSettings,
    pub initial_view: ViewState,
    pub initial_kernel: KernelSelector,
    /// Upper bound on render workers; `None` uses the available parallelism.
    pub max_workers: Option<NonZeroU32>,
}

impl RendererConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        let limits = &self.limits;
        if !limits.zoom_floor.is_finite() || limits.zoom_floor <= 0.0 {
            return Err(ConfigError::InvalidZoomFloor(limits.zoom_floor));
        }
        if !limits.plane_min.is_finite() || !limits.plane_max.is_finite() || limits.plane_min >= limits.plane_max {
            return Err(ConfigError::InvalidPlaneBounds {
                min: limits.plane_min,
                max: limits.plane_max,
            });
        }
        if !limits.scroll_zoom_factor.is_finite() || limits.scroll_zoom_factor <= 1.0 {
            return Err(ConfigError::InvalidScrollFactor(limits.scroll_zoom_factor));
        }

        let animation = &self.animation;
        if !animation.smoothing_rate.is_finite() || animation.smoothing_rate <= 0.0 {
            return Err(ConfigError::InvalidSmoothingRate(animation.smoothing_rate));
        }
        if !animation.epsilon.is_finite() || animation.epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(animation.epsilon));
        }

        if limits.clamp(self.initial_view) != self.initial_view {
            return Err(ConfigError::InitialViewOutOfBounds(self.initial_view));
        }

        Ok(())
    }

    #[must_use]
    pub fn gradient(&self) -> ColourGradient {
        ColourGradient::new(self.gradient_stops)
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            gradient_stops: DEFAULT_GRADIENT_STOPS,
            limits: ViewLimits::default(),
            animation: AnimationSettings::default(),
            initial_view: ViewState::default(),
            initial_kernel: KernelSelector::default(),
            max_workers: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RendererConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.max_iterations, 128);
        assert_eq!(config.initial_kernel, KernelSelector::Mandelbrot);
        assert_eq!(config.gradient(), ColourGradient::default());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let config = RendererConfig {
            height: 0,
            ..RendererConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDimension { width: 1280, height: 0 })
        );
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let config = RendererConfig {
            max_iterations: 0,
            ..RendererConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn limits_are_checked() {
        let inverted = RendererConfig {
            limits: ViewLimits {
                plane_min: 1.0,
                plane_max: -1.0,
                ..ViewLimits::default()
            },
            ..RendererConfig::default()
        };
        let flat_scroll = RendererConfig {
            limits: ViewLimits {
                scroll_zoom_factor: 1.0,
                ..ViewLimits::default()
            },
            ..RendererConfig::default()
        };
        let no_floor = RendererConfig {
            limits: ViewLimits {
                zoom_floor: 0.0,
                ..ViewLimits::default()
            },
            ..RendererConfig::default()
        };

        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvalidPlaneBounds { min: 1.0, max: -1.0 })
        );
        assert_eq!(flat_scroll.validate(), Err(ConfigError::InvalidScrollFactor(1.0)));
        assert_eq!(no_floor.validate(), Err(ConfigError::InvalidZoomFloor(0.0)));
    }

    #[test]
    fn animation_settings_are_checked() {
        let frozen = RendererConfig {
            animation: AnimationSettings {
                smoothing_rate: 0.0,
                ..AnimationSettings::default()
            },
            ..RendererConfig::default()
        };
        let never_settles = RendererConfig {
            animation: AnimationSettings {
                epsilon: f64::NAN,
                ..AnimationSettings::default()
            },
            ..RendererConfig::default()
        };

        assert_eq!(frozen.validate(), Err(ConfigError::InvalidSmoothingRate(0.0)));
        assert!(matches!(never_settles.validate(), Err(ConfigError::InvalidEpsilon(_))));
    }

    #[test]
    fn initial_view_must_be_inside_limits() {
        let config = RendererConfig {
            initial_view: ViewState::new(0.5, 0.0, 0.0),
            ..RendererConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InitialViewOutOfBounds(ViewState::new(0.5, 0.0, 0.0)))
        );
    }
}
