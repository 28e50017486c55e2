mod commands;
mod render;
mod setup;

pub use commands::{report_error, run};
