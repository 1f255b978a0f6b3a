use crate::core::actions::render_pass::render_job::RenderJob;
use crate::core::actions::render_pass::shader::shade;
use crate::core::data::pixel_surface::{PixelSurface, SurfaceError};
use crate::core::util::screen_to_fractal::CoordinateMapper;

/// Single-threaded reference for [`run_render_pass`](super::render_pass::run_render_pass).
///
/// `job.workers` is ignored and nothing is published.
pub fn render_serial(surface: &mut PixelSurface, job: &RenderJob) -> Result<(), SurfaceError> {
    let (width, height) = (surface.width(), surface.height());
    let mapper = CoordinateMapper::new(width, height, job.view);
    let kernel = job.kernel.kernel();

    for y in 0..height {
        for x in 0..width {
            let orbit = kernel.iterate(mapper.map_pixel(x, y), job.max_iterations);
            surface.set_colour(x, y, shade(orbit, &job.gradient, job.max_iterations))?;
        }
    }

    Ok(())
}
