use movies::{Movie, Result};

/// A destination movies can be appended to.
pub trait MoviesClient {
    /// Format `movie` with this client's formatter and print it on the
    /// client's destination.
    fn append(&mut self, movie: &mut Movie) -> Result<()>;
}
