//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render certificate and evaluation data handed to them by pages;
//! none of them perform network reads.

pub mod certificate_card;
pub mod course_sidebar;
pub mod evaluation_table;
