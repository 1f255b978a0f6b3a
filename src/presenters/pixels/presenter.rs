use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use parking_lot::Mutex;
use pixels::{Pixels, SurfaceTexture, wgpu};
use std::sync::Arc;
use winit::window::Window;

use crate::controllers::interactive::data::completed_frame::CompletedFrame;
use crate::core::data::pixel_surface::SurfaceError;
use crate::presenters::pixels::staging::StagingFrame;

/// Event-loop side of the window: owns the `pixels` framebuffer and the egui renderer.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    staging: Arc<Mutex<StagingFrame>>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    /// `width`x`height` is the fractal surface; the window surface may be larger on HiDPI screens.
    pub fn new(
        window: &'static Window,
        width: u32,
        height: u32,
        staging: Arc<Mutex<StagingFrame>>,
    ) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            staging,
            width: window_size.width,
            height: window_size.height,
        })
    }

    /// Copies tiles presented since the last call into the framebuffer.
    pub fn sync_staged_tiles(&mut self) -> bool {
        self.staging.lock().copy_if_dirty(self.pixels.frame_mut())
    }

    pub fn draw_completed_frame(&mut self, frame: &CompletedFrame) -> Result<(), SurfaceError> {
        frame.surface.write_rgba_into(self.pixels.frame_mut())
    }

    /// Maps a window position to surface pixel coordinates, or `None` outside the surface.
    #[must_use]
    pub fn window_to_surface(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .ok()
            .map(|(px, py)| (px as f64, py as f64))
    }

    pub fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives = egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}
