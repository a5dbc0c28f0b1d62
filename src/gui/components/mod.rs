// src/gui/components/mod.rs
pub mod confirm;
pub mod data_table;
pub mod toolbar;
