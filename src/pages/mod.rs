//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and state; rendering details
//! for list entries live in `components`.

pub mod admin;
pub mod submission;
