//! Sink adaptors for printing movies.
//!
//! A client appends a movie to a destination: it asks the movie to format
//! itself with the client's formatter, then to print itself on the
//! destination.

pub mod file_adaptor;
pub mod stream_adaptor;
pub mod traits;

pub use file_adaptor::{FileAdaptor, FileMode};
pub use stream_adaptor::StreamAdaptor;
pub use traits::MoviesClient;
