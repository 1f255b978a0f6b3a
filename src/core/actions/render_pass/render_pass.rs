use parking_lot::Mutex;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::core::actions::render_pass::ports::display_surface::DisplaySurface;
use crate::core::actions::render_pass::render_job::RenderJob;
use crate::core::actions::render_pass::shader::shade;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::pixel_surface::{PixelSurface, SurfaceError, SurfaceStrip};
use crate::core::fractals::kernel::FractalKernel;
use crate::core::util::partition_surface::{PartitionError, partition_surface};
use crate::core::util::screen_to_fractal::CoordinateMapper;

#[derive(Debug, Error)]
pub enum RenderPassError {
    #[error("cannot partition surface: {0}")]
    Partition(#[from] PartitionError),
    #[error("cannot split surface into strips: {0}")]
    Surface(#[from] SurfaceError),
    #[error("render worker {worker} panicked")]
    WorkerPanicked { worker: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    pub workers: u32,
    pub tiles: u32,
    pub duration: Duration,
}

fn fill_tile(
    strip: &mut SurfaceStrip<'_>,
    tile: PixelRect,
    mapper: &CoordinateMapper,
    kernel: &dyn FractalKernel,
    job: &RenderJob,
) {
    // Column-outer order walks the strip's memory front to back
    for x in tile.left()..tile.right() {
        for y in tile.top()..tile.bottom() {
            let orbit = kernel.iterate(mapper.map_pixel(x, y), job.max_iterations);
            strip.set(x, y, shade(orbit, &job.gradient, job.max_iterations));
        }
    }
}

/// Fills `surface` for `job` using one scoped worker per vertical strip.
///
/// Each worker computes its top half without locking, then publishes it to
/// `display` (blit and present) under the lock, then does the same for its
/// bottom half. All workers are joined before this returns.
pub fn run_render_pass<D: DisplaySurface>(
    surface: &mut PixelSurface,
    job: &RenderJob,
    display: &Mutex<D>,
) -> Result<PassReport, RenderPassError> {
    let started = Instant::now();
    let (width, height) = (surface.width(), surface.height());

    let plans = partition_surface(width, height, job.workers)?;
    let strip_rects: Vec<PixelRect> = plans.iter().map(|plan| plan.strip).collect();
    let strips = surface.strips_mut(&strip_rects)?;

    let mapper = CoordinateMapper::new(width, height, job.view);
    let kernel = job.kernel.kernel();

    let panicked = thread::scope(|scope| {
        let handles = strips
            .into_iter()
            .zip(&plans)
            .map(|(mut strip, plan)| {
                scope.spawn(move || {
                    for &tile in &plan.tiles {
                        fill_tile(&mut strip, tile, &mapper, kernel, job);

                        let mut display = display.lock();
                        display.blit(strip.tile(tile));
                        display.present();
                    }
                })
            })
            .collect::<Vec<_>>();

        // Join every handle so a panicking worker cannot escape the scope
        let mut panicked = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(worker as u32);
            }
        }

        panicked
    });

    if let Some(worker) = panicked {
        return Err(RenderPassError::WorkerPanicked { worker });
    }

    Ok(PassReport {
        workers: job.workers,
        tiles: plans.iter().map(|plan| plan.tiles.len() as u32).sum(),
        duration: started.elapsed(),
    })
}
