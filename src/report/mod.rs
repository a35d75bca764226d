// src/report/mod.rs
pub mod compose;
pub mod display;
pub mod models;
pub mod normalize;

// Re-export key report types for convenience
pub use compose::{compose_rows, HeaderStyle, VerticalRow};
pub use models::{AccountRecord, Bureau, BureauNotice};
pub use normalize::{sort_accounts, tag_accounts};
