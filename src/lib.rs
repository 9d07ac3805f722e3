//! Slide Prompt Studio core library.
//!
//! Generates slide-deck styling prompts from a persistent customization
//! state: color palettes, style presets, and selectable tag categories.
//! The library covers the default catalog, the keyed persistence medium,
//! the load/merge/migrate/save store, the working-state session, and the
//! prompt composer; the `cli` module provides the command surface.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod prompt;
pub mod session;
pub mod storage;
pub mod store;
