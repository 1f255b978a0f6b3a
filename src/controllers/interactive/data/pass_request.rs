use crate::core::data::view_state::ViewState;
use crate::core::fractals::kernel_selector::KernelSelector;

/// What a pass renders. Two equal requests produce identical surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassRequest {
    pub view: ViewState,
    pub kernel: KernelSelector,
    pub max_iterations: u32,
}
