//! Interactive rendering: input handling, view animation and single-flight passes.
//!
//! A host feeds [`HostEvent`]s and ticks into an [`ExplorerSession`], which
//! drives a [`RenderEngine`]. Completed frames land in the [`FrameCache`] for
//! the host to present.

pub mod data;
pub mod engine;
pub mod events;
pub mod frame_cache;
pub mod session;

pub use data::completed_frame::CompletedFrame;
pub use data::pass_request::PassRequest;
pub use engine::{EngineError, RenderEngine, Trigger};
pub use events::host_event::{HostEvent, KeyCode, ScrollDirection};
pub use frame_cache::FrameCache;
pub use session::{ExplorerSession, SessionControl, SessionStatus};
