//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, route param
//! effects) and delegates rendering details to `components`.

pub mod certificate_detail;
pub mod certificates;
pub mod evaluations;
