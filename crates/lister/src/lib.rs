//! Finding and listing movies.
//!
//! This crate provides:
//! - `MovieFinder` and `MovieLister` traits
//! - `InMemoryMovieFinder`, a fixed, injected collection of movies
//! - `FinderMovieLister`, which applies an action to the movies of one
//!   director (or one title) found by a finder
//!
//! ## Example Usage
//! ```ignore
//! use lister::{FinderMovieLister, InMemoryMovieFinder, MovieLister};
//! use movies::{MovieFormatter, SimpleStringFormatter};
//!
//! let mut lister = FinderMovieLister::new(InMemoryMovieFinder::with_example_movies());
//! let mut stdout = std::io::stdout();
//!
//! lister.apply_to_movies_directed_by(
//!     &mut |movie| SimpleStringFormatter.format_and_print_on(movie, &mut stdout),
//!     "David Lynch",
//! )?;
//! ```

pub mod finder;
pub mod movie_lister;
pub mod traits;

// Re-export main types
pub use finder::{InMemoryMovieFinder, example_movies};
pub use movie_lister::FinderMovieLister;
pub use traits::{MovieAction, MovieFinder, MovieLister};
