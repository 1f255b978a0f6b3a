pub mod calculate_worker_count;
pub mod partition_surface;
pub mod screen_to_fractal;
