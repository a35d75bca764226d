// src/extractors/mod.rs
pub mod accounts;
pub mod section;

// Re-export key extraction functions for convenience
pub use accounts::parse_accounts;
pub use section::extract_section;
