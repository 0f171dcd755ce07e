//! Formatter implementations.
//!
//! - `SimpleStringFormatter`: `Movie (title: T, director: D)` lines
//! - `JsonObjectFormatter`: one JSON object per movie
//! - `JsonArrayFormatter`: a growing JSON array of every movie seen so far

pub mod json_array;
pub mod json_object;
pub mod json_text;
pub mod simple;

// Re-export for convenience
pub use json_array::JsonArrayFormatter;
pub use json_object::JsonObjectFormatter;
pub use simple::SimpleStringFormatter;
