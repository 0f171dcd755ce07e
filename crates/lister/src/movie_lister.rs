//! Lister that delegates to a finder.

use crate::traits::{MovieAction, MovieFinder, MovieLister};
use movies::Result;

/// Lists movies by asking its finder to run a per-movie conditional action.
///
/// ## Usage
/// ```ignore
/// let mut lister = FinderMovieLister::new(InMemoryMovieFinder::with_example_movies());
/// lister.apply_to_movies_directed_by(&mut |movie| client.append(movie), "George Lucas")?;
/// ```
#[derive(Debug, Clone)]
pub struct FinderMovieLister<F> {
    finder: F,
}

impl<F: MovieFinder> FinderMovieLister<F> {
    pub fn new(finder: F) -> Self {
        Self { finder }
    }

    /// Give back the finder, e.g. to run another query over the same movies.
    pub fn into_inner(self) -> F {
        self.finder
    }
}

impl<F: MovieFinder> MovieLister for FinderMovieLister<F> {
    fn apply_to_movies_directed_by(
        &mut self,
        action: &mut MovieAction<'_>,
        director: &str,
    ) -> Result<()> {
        tracing::debug!("Listing movies directed by {}", director);
        self.finder.find_all_and_apply(&mut |movie| {
            movie.if_directed_by_do(director, &mut *action)?;
            Ok(())
        })
    }

    fn apply_to_movies_titled(&mut self, action: &mut MovieAction<'_>, title: &str) -> Result<()> {
        tracing::debug!("Listing movies titled '{}'", title);
        self.finder.find_all_and_apply(&mut |movie| {
            movie.if_title_do(title, &mut *action)?;
            Ok(())
        })
    }
}
