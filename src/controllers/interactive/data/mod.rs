pub mod completed_frame;
pub mod pass_request;
