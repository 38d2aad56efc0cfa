//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`form` for the public submission form, `admin`
//! for the dashboard) so each page depends on a small focused model that
//! unit tests can drive without a browser.

pub mod admin;
pub mod form;
