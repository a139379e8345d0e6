pub mod background;
pub mod clock;
pub mod config;
pub mod task;
