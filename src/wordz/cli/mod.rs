mod commands;
mod menu;
mod render;
mod setup;

pub use commands::run;
