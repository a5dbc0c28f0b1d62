// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod clip;
pub mod config;
pub mod core;
pub mod specs;

pub mod gui;
pub mod progress;
pub mod scrape;
