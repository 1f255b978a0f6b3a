use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::controllers::interactive::data::completed_frame::CompletedFrame;

/// Latest completed frame plus a flag saying it has not been presented yet.
#[derive(Debug, Default)]
pub struct FrameCache {
    latest: Mutex<Option<Arc<CompletedFrame>>>,
    fresh: AtomicBool,
}

impl FrameCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, frame: CompletedFrame) -> Arc<CompletedFrame> {
        let frame = Arc::new(frame);
        let mut latest = self.latest.lock();

        *latest = Some(Arc::clone(&frame));
        self.fresh.store(true, Ordering::Release);

        frame
    }

    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.fresh.load(Ordering::Acquire)
    }

    /// Yields the latest frame once per store.
    pub fn take_fresh(&self) -> Option<Arc<CompletedFrame>> {
        let latest = self.latest.lock();

        if self.fresh.swap(false, Ordering::AcqRel) {
            latest.clone()
        } else {
            None
        }
    }

    /// Runs `present` on the latest frame if it is fresh. Returns whether it ran.
    pub fn present_if_fresh<F>(&self, present: F) -> bool
    where
        F: FnOnce(&CompletedFrame),
    {
        match self.take_fresh() {
            Some(frame) => {
                present(&frame);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn latest(&self) -> Option<Arc<CompletedFrame>> {
        self.latest.lock().clone()
    }
}
