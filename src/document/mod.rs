// src/document/mod.rs
pub mod pdf;

pub use pdf::load_document_text;
