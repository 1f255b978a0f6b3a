use crate::core::data::view_state::ViewState;
use crate::core::view::limits::{AnimationSettings, ViewLimits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationStatus {
    #[default]
    Settled,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// The current view moved (or just snapped) and should be rendered.
    pub pass_requested: bool,
    /// This tick converged on the target.
    pub settled: bool,
}

/// Eases the current view toward the target a fraction at a time.
///
/// Input only ever moves `target`; `tick` is the sole writer of `current`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewAnimator {
    home: ViewState,
    current: ViewState,
    target: ViewState,
    status: AnimationStatus,
    limits: ViewLimits,
    settings: AnimationSettings,
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

impl ViewAnimator {
    #[must_use]
    pub fn new(home: ViewState, limits: ViewLimits, settings: AnimationSettings) -> Self {
        let home = limits.clamp(home);

        Self {
            home,
            current: home,
            target: home,
            status: AnimationStatus::Settled,
            limits,
            settings,
        }
    }

    #[must_use]
    pub fn current(&self) -> ViewState {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> ViewState {
        self.target
    }

    #[must_use]
    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    #[must_use]
    pub fn limits(&self) -> &ViewLimits {
        &self.limits
    }

    /// Clamps and installs a new target. Returns `false` if nothing changed.
    pub fn set_target(&mut self, target: ViewState) -> bool {
        let target = self.limits.clamp(target);

        if target == self.target {
            return false;
        }

        self.target = target;
        self.status = AnimationStatus::Animating;
        true
    }

    pub fn recenter(&mut self, offset_x: f64, offset_y: f64) -> bool {
        self.set_target(ViewState {
            offset_x,
            offset_y,
            ..self.target
        })
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_target(ViewState {
            zoom: self.target.zoom * self.limits.scroll_zoom_factor,
            ..self.target
        })
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_target(ViewState {
            zoom: self.target.zoom / self.limits.scroll_zoom_factor,
            ..self.target
        })
    }

    pub fn reset(&mut self) -> bool {
        self.set_target(self.home)
    }

    pub fn tick(&mut self, dt: f64) -> TickReport {
        if self.status == AnimationStatus::Settled {
            return TickReport::default();
        }

        let t = self.settings.step_factor(dt);
        self.current = ViewState {
            zoom: lerp(self.current.zoom, self.target.zoom, t),
            offset_x: lerp(self.current.offset_x, self.target.offset_x, t),
            offset_y: lerp(self.current.offset_y, self.target.offset_y, t),
        };

        if self.current.is_within(&self.target, self.settings.epsilon) {
            self.current = self.target;
            self.status = AnimationStatus::Settled;

            return TickReport {
                pass_requested: true,
                settled: true,
            };
        }

        TickReport {
            pass_requested: true,
            settled: false,
        }
    }
}

impl Default for ViewAnimator {
    fn default() -> Self {
        Self::new(ViewState::default(), ViewLimits::default(), AnimationSettings::default())
    }
}
