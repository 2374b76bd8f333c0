//! Terminal shell: reads commands from stdin, renders screens to stdout.
mod app;
mod command;
mod config;
mod effects;
mod render;

pub use app::run_app;
