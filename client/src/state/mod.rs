//! Page-scoped view state.
//!
//! DESIGN
//! ======
//! State structs are plain data with small transition methods so the loading,
//! error and stale-response rules can be tested without a browser. Pages wrap
//! them in `RwSignal`s.

pub mod certificates;
pub mod evaluations;
