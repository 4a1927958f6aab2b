//! adtop - marketing analytics dashboard library.
//!
//! This library provides the functionality behind the `adtop` binary: the
//! deterministic sample-data generator, the filter/sort/page table engine,
//! CSV and PDF exporters, and the interactive TUI itself.

pub mod engine;
pub mod export;
pub mod fmt;
pub mod generator;
pub mod model;
pub mod refresh;
pub mod tui;
pub mod view;
