use crate::controllers::interactive::session::SessionStatus;
use crate::core::fractals::kernel_selector::KernelSelector;
use crate::core::view::animator::AnimationStatus;

pub fn status_panel(ctx: &egui::Context, status: &SessionStatus, width: u32, height: u32) {
    egui::Window::new("Fractal Renderer")
        .default_pos([10.0, 10.0])
        .default_size([240.0, 180.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Kernel: {}", status.kernel.display_name()));
            ui.label(format!("Zoom: {:.4}", status.current.zoom));
            ui.label(format!(
                "Offset: ({:.6}, {:.6})",
                status.current.offset_x, status.current.offset_y
            ));

            let animation = match status.animation {
                AnimationStatus::Settled => "settled",
                AnimationStatus::Animating => "animating",
            };
            let pass = if status.rendering { "rendering" } else { "idle" };
            ui.label(format!("View: {animation}, pass: {pass}"));

            ui.separator();
            ui.label(format!("Surface: {width}x{height}"));
            if let Some(generation) = status.last_generation {
                ui.label(format!("Frames rendered: {generation}"));
            }
            if let Some(duration) = status.last_pass {
                ui.label(format!("Last pass: {} ms", duration.as_millis()));
            }

            ui.separator();
            for (index, kernel) in KernelSelector::ALL.iter().enumerate() {
                ui.label(format!("{}: {}", index + 1, kernel.display_name()));
            }
            ui.label("Click: recentre, wheel: zoom, R: reset, Esc: quit");
        });
}
