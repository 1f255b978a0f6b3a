use crate::core::data::colour::Colour;

pub const GRADIENT_STOP_COUNT: usize = 5;

/// Blue, green, yellow, red and back to blue.
pub const DEFAULT_GRADIENT_STOPS: [Colour; GRADIENT_STOP_COUNT] = [
    Colour::new(50, 50, 255),
    Colour::new(50, 255, 50),
    Colour::new(255, 255, 50),
    Colour::new(255, 50, 50),
    Colour::new(50, 50, 255),
];

/// Colour used for points that never escape (or never converge).
pub const IN_SET_COLOUR: Colour = Colour::BLACK;

/// Piecewise-linear gradient looping over `[0, 1)` of the iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourGradient {
    stops: [Colour; GRADIENT_STOP_COUNT],
}

impl ColourGradient {
    #[must_use]
    pub const fn new(stops: [Colour; GRADIENT_STOP_COUNT]) -> Self {
        Self { stops }
    }

    #[must_use]
    pub fn stops(&self) -> &[Colour; GRADIENT_STOP_COUNT] {
        &self.stops
    }

    #[must_use]
    pub fn colour(&self, iteration: u32, max_iterations: u32) -> Colour {
        if max_iterations == 0 {
            return self.stops[0];
        }

        let segments = (GRADIENT_STOP_COUNT - 1) as f64;
        let position = (f64::from(iteration) / f64::from(max_iterations)).fract() * segments;
        let lower = (position.floor() as usize).min(GRADIENT_STOP_COUNT - 2);
        let fraction = position - lower as f64;

        self.stops[lower].lerp(self.stops[lower + 1], fraction)
    }
}

impl Default for ColourGradient {
    fn default() -> Self {
        Self::new(DEFAULT_GRADIENT_STOPS)
    }
}
