pub mod ports;
pub mod render_job;
pub mod render_pass;
pub mod render_serial;
pub mod shader;
