use crate::core::colour_mapping::gradient::{ColourGradient, IN_SET_COLOUR};
use crate::core::data::colour::Colour;
use crate::core::fractals::orbit::Orbit;

#[inline]
#[must_use]
pub fn shade(orbit: Orbit, gradient: &ColourGradient, max_iterations: u32) -> Colour {
    match orbit.iteration() {
        Some(iteration) => gradient.colour(iteration, max_iterations),
        None => IN_SET_COLOUR,
    }
}
