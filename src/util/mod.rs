//! Cross-cutting helpers shared by pages.

pub mod previews;
pub mod session;
