//! # Movies Crate
//!
//! The movie entity and the formatters that turn it into text.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` (plain fields) and `Movie` (entity with
//!   predicate-action queries and a formatted-text slot)
//! - **traits**: the `MovieFormatter` strategy
//! - **formatters**: simple-string, JSON-object and accumulating JSON-array
//!   formatters
//! - **error**: Error types for formatting and printing
//!
//! ## Example Usage
//!
//! ```ignore
//! use movies::{Movie, formatters::JsonObjectFormatter};
//!
//! let mut movie = Movie::new("Star Wars", "George Lucas");
//! let mut stdout = std::io::stdout();
//!
//! movie.if_directed_by_do("George Lucas", |m| {
//!     m.format_with(&mut JsonObjectFormatter)?.print_on(&mut stdout)?;
//!     Ok(())
//! })?;
//! ```

// Public modules
pub mod error;
pub mod formatters;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{MovieError, Result};
pub use formatters::{JsonArrayFormatter, JsonObjectFormatter, SimpleStringFormatter};
pub use traits::MovieFormatter;
pub use types::{Movie, MovieRecord};
