//! A finder over a fixed, in-memory collection.

use crate::traits::{MovieAction, MovieFinder};
use movies::{Movie, Result};

/// The example collection, in declaration order.
pub fn example_movies() -> Vec<Movie> {
    vec![
        Movie::new("Star Wars", "George Lucas"),
        Movie::new("Lost Highway", "David Lynch"),
        Movie::new("Naked Lunch", "David Cronenberg"),
        Movie::new("Mulholland Dr", "David Lynch"),
        Movie::new(
            "The Adventures of Buckaroo Banzai Across the 8th Dimension",
            "W.D. Richter",
        ),
        Movie::new("Wild At Heart", "David Lynch"),
    ]
}

/// Finder over a collection built once and injected at construction.
///
/// The collection is never reordered, grown or shrunk. Actions may still
/// format the movies they are handed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieFinder {
    movies: Vec<Movie>,
}

impl InMemoryMovieFinder {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Finder over [`example_movies`].
    pub fn with_example_movies() -> Self {
        Self::new(example_movies())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl MovieFinder for InMemoryMovieFinder {
    fn find_all_and_apply(&mut self, action: &mut MovieAction<'_>) -> Result<()> {
        for movie in &mut self.movies {
            tracing::trace!("visiting {:?}", movie);
            action(movie)?;
        }
        Ok(())
    }
}
