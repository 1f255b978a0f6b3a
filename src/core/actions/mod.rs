pub mod render_pass;
pub mod single_flight;
