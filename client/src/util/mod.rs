//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting, lookup and geometry helpers live here so pages and
//! components stay declarative and the logic stays unit-testable.

pub mod chart;
pub mod format;
pub mod listing;
pub mod status_style;
pub mod ui_persistence;
