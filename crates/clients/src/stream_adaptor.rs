//! Client writing to an already-open sink such as stdout.

use std::io::Write;

use crate::traits::MoviesClient;
use movies::{Movie, MovieFormatter, Result};

/// Appends movies to a borrowed writer using a borrowed formatter.
///
/// Borrowing the formatter lets a stateful formatter outlive the client,
/// so a `JsonArrayFormatter` can still be collected once listing is done.
pub struct StreamAdaptor<'a> {
    sink: &'a mut dyn Write,
    formatter: &'a mut dyn MovieFormatter,
}

impl<'a> StreamAdaptor<'a> {
    pub fn new(sink: &'a mut dyn Write, formatter: &'a mut dyn MovieFormatter) -> Self {
        Self { sink, formatter }
    }
}

impl MoviesClient for StreamAdaptor<'_> {
    fn append(&mut self, movie: &mut Movie) -> Result<()> {
        movie.format_with(&mut *self.formatter)?.print_on(&mut *self.sink)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movies::{JsonArrayFormatter, SimpleStringFormatter};

    #[test]
    fn test_append_formats_and_prints() {
        let mut sink = Vec::new();
        let mut formatter = SimpleStringFormatter;
        let mut movie = Movie::new("Star Wars", "George Lucas");

        StreamAdaptor::new(&mut sink, &mut formatter)
            .append(&mut movie)
            .unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "Movie (title: Star Wars, director: George Lucas)\n"
        );
    }

    #[test]
    fn test_formatter_state_survives_adaptor() {
        let mut sink = Vec::new();
        let mut formatter = JsonArrayFormatter::new();

        {
            let mut client = StreamAdaptor::new(&mut sink, &mut formatter);
            client.append(&mut Movie::new("Lost Highway", "David Lynch")).unwrap();
            client.append(&mut Movie::new("Mulholland Dr", "David Lynch")).unwrap();
        }

        assert_eq!(formatter.len(), 2);
        assert_eq!(String::from_utf8(sink).unwrap().lines().count(), 2);
    }
}
