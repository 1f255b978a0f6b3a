pub mod burning_ship;
pub mod escape_time;
pub mod kernel;
pub mod kernel_selector;
pub mod mandelbrot;
pub mod newton;
pub mod orbit;
pub mod tricorn;
