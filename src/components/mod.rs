//! Presentational components shared by pages.

pub mod user_card;
