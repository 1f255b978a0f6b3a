use crate::core::colour_mapping::gradient::ColourGradient;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::kernel_selector::KernelSelector;

/// Everything a pass needs besides the surface and the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderJob {
    pub view: ViewState,
    pub kernel: KernelSelector,
    pub max_iterations: u32,
    pub gradient: ColourGradient,
    pub workers: u32,
}
