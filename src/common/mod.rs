//! Common infrastructure modules shared across reports
//!
//! This module provides reusable infrastructure for:
//! - Number formatting for console output and chart labels
//! - Row types and ASCII table formatting
//! - Plotting side-by-side bar charts

pub mod format;
pub mod plots;
pub mod tables;

// Re-export commonly used items
pub use plots::PlotError;
