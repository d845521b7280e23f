//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display
//! formatting from page and component logic to improve reuse and testability.

pub mod api_base;
pub mod clipboard;
pub mod format;
