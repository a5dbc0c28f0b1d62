// src/specs/mod.rs
//! Page-specific scraping specifications.
//!
//! Each spec encodes *where the ground truth lives in the HTML* of one page
//! and *how to extract it*: selector choice, tolerant scanning via
//! `core::html`, and light shaping into record structs. Caching, delivery and
//! UI concerns live in higher layers. Specs are testable offline against
//! captured or inline markup.

pub mod textbooks;
