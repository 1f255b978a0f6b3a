pub mod host_event;
