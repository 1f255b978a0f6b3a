use std::num::NonZeroU32;

pub fn available_workers() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(u32::try_from(n.get()).unwrap_or(u32::MAX)))
        .unwrap_or(NonZeroU32::MIN)
}

/// Caps `max_workers` so every strip of a `surface_width` surface keeps at least one column.
pub fn calculate_worker_count(max_workers: NonZeroU32, surface_width: u32) -> u32 {
    max_workers.get().min(surface_width).max(1)
}
