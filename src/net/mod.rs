//! Networking modules for HTTP calls and the live submission feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `feed` manages the push-channel (WebSocket)
//! lifecycle, and `types` defines the shared wire schema.

pub mod api;
pub mod feed;
pub mod types;
