//! Core traits for finding and listing movies.
//!
//! Both traits take the action to run instead of returning movies. Callers
//! never get a collection back; they say what should happen to each match.

use movies::{Movie, Result};

/// An action applied to a movie. Returning an error stops the iteration.
pub type MovieAction<'a> = dyn FnMut(&mut Movie) -> Result<()> + 'a;

/// Owns a collection of movies and applies actions to them.
///
/// ## Design Note
/// - Actions get `&mut Movie` because formatting a movie writes into its
///   formatted-text slot
/// - Actions are `FnMut` trait objects so one closure can run over the whole
///   collection while keeping a sink or formatter borrowed
/// - The collection itself is never grown, shrunk or reordered
pub trait MovieFinder {
    /// Apply `action` to every movie, once each, in collection order.
    ///
    /// # Arguments
    /// * `action` - Closure run on each movie in turn
    ///
    /// # Returns
    /// * `Ok(())` - The action ran on every movie
    /// * `Err` - The first error returned by `action`; later movies are skipped
    fn find_all_and_apply(&mut self, action: &mut MovieAction<'_>) -> Result<()>;
}

/// Query facade over a finder.
///
/// Implementations wrap `action` in a per-movie predicate check and hand
/// that to the finder, so matching stays inside `Movie`.
pub trait MovieLister {
    /// Apply `action` to every movie directed by `director`, in collection
    /// order. No match is not an error.
    ///
    /// # Arguments
    /// * `action` - Closure run on each matching movie
    /// * `director` - Director to match (exact, case-sensitive)
    ///
    /// # Returns
    /// * `Ok(())` - Every match was handled, possibly none
    /// * `Err` - The first error returned by `action`
    fn apply_to_movies_directed_by(
        &mut self,
        action: &mut MovieAction<'_>,
        director: &str,
    ) -> Result<()>;

    /// Apply `action` to every movie titled `title`, in collection order.
    ///
    /// # Arguments
    /// * `action` - Closure run on each matching movie
    /// * `title` - Title to match (exact, case-sensitive)
    ///
    /// # Returns
    /// * `Ok(())` - Every match was handled, possibly none
    /// * `Err` - The first error returned by `action`
    fn apply_to_movies_titled(&mut self, action: &mut MovieAction<'_>, title: &str) -> Result<()>;
}
