pub mod recording_display;
