use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use clients::{FileAdaptor, FileMode, MoviesClient, StreamAdaptor};
use lister::{FinderMovieLister, InMemoryMovieFinder, MovieLister};
use movies::{
    JsonArrayFormatter, JsonObjectFormatter, Movie, MovieFormatter, SimpleStringFormatter,
};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// movie-lister - list movies through pluggable formatters
#[derive(Parser)]
#[command(name = "movie-lister")]
#[command(about = "List movies by director or title", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the movies directed by someone
    List {
        /// Director to match (exact, case-sensitive)
        #[arg(long)]
        director: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the movies with an exact title
    Title {
        /// Title to match (exact, case-sensitive)
        #[arg(long)]
        title: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print George Lucas and David Lynch to stdout, David Cronenberg to a file
    Demo {
        /// File receiving the David Cronenberg listing
        #[arg(short, long, default_value = "movies.txt")]
        output: PathBuf,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "simple")]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep earlier file contents instead of overwriting them
    #[arg(long, requires = "output")]
    append: bool,
}

impl OutputArgs {
    fn file_mode(&self) -> FileMode {
        if self.append {
            FileMode::Append
        } else {
            FileMode::Overwrite
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Movie (title: T, director: D)
    Simple,
    /// One JSON object per movie
    Json,
    /// A growing JSON array, collected once at the end
    JsonArray,
}

#[derive(Clone, Copy)]
enum Query<'q> {
    Director(&'q str),
    Title(&'q str),
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Director(director) => write!(f, "director '{}'", director),
            Query::Title(title) => write!(f, "title '{}'", title),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries movie output only
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { director, output } => handle_query(Query::Director(&director), &output)?,
        Commands::Title { title, output } => handle_query(Query::Title(&title), &output)?,
        Commands::Demo { output } => handle_demo(&output)?,
    }

    Ok(())
}

/// Handle the 'list' and 'title' commands
fn handle_query(query: Query<'_>, args: &OutputArgs) -> Result<()> {
    let mut lister = FinderMovieLister::new(InMemoryMovieFinder::with_example_movies());
    tracing::info!("Listing movies for {}", query);

    let count = match args.format {
        Format::Simple => emit(&mut lister, query, &mut SimpleStringFormatter, args)?,
        Format::Json => emit(&mut lister, query, &mut JsonObjectFormatter, args)?,
        Format::JsonArray => {
            let mut formatter = JsonArrayFormatter::new();
            let count = emit(&mut lister, query, &mut formatter, args)?;
            collect(&formatter, args.output.as_deref())?;
            count
        }
    };

    report(query, count, args.output.as_deref());
    Ok(())
}

/// Run the query, appending every match to stdout or the output file.
/// Returns how many movies matched.
fn emit(
    lister: &mut impl MovieLister,
    query: Query<'_>,
    formatter: &mut dyn MovieFormatter,
    args: &OutputArgs,
) -> Result<usize> {
    let mut count = 0;
    let mut stdout = io::stdout().lock();

    let mut action = |movie: &mut Movie| -> movies::Result<()> {
        match &args.output {
            Some(path) => FileAdaptor::new(path, &mut *formatter)
                .with_mode(args.file_mode())
                .append(movie)?,
            None => StreamAdaptor::new(&mut stdout, &mut *formatter).append(movie)?,
        }
        count += 1;
        Ok(())
    };

    match query {
        Query::Director(director) => lister.apply_to_movies_directed_by(&mut action, director),
        Query::Title(title) => lister.apply_to_movies_titled(&mut action, title),
    }
    .with_context(|| format!("Failed to list movies for {}", query))?;

    stdout.flush().context("Failed to flush stdout")?;
    Ok(count)
}

/// Write the accumulated JSON array to the same destination the listing used
fn collect(formatter: &JsonArrayFormatter, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            formatter.collect_and_print(&mut file)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            formatter.collect_and_print(&mut stdout)?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

/// Handle the 'demo' command
fn handle_demo(output: &Path) -> Result<()> {
    let mut lister = FinderMovieLister::new(InMemoryMovieFinder::with_example_movies());
    let mut formatter = SimpleStringFormatter;
    let mut stdout = io::stdout().lock();

    for director in ["George Lucas", "David Lynch"] {
        lister
            .apply_to_movies_directed_by(
                &mut |movie| StreamAdaptor::new(&mut stdout, &mut formatter).append(movie),
                director,
            )
            .with_context(|| format!("Failed to list movies directed by {}", director))?;
    }
    stdout.flush().context("Failed to flush stdout")?;

    lister
        .apply_to_movies_directed_by(
            &mut |movie| FileAdaptor::new(output, &mut formatter).append(movie),
            "David Cronenberg",
        )
        .with_context(|| format!("Failed to write {}", output.display()))?;

    eprintln!("{} Wrote David Cronenberg to {}", "✓".green(), output.display());
    Ok(())
}

/// Status line on stderr
fn report(query: Query<'_>, count: usize, output: Option<&Path>) {
    if count == 0 {
        eprintln!("{} No movies matched {}", "•".yellow(), query);
        return;
    }

    match output {
        Some(path) => eprintln!(
            "{} {} movie(s) matched {}, written to {}",
            "✓".green(),
            count,
            query,
            path.display()
        ),
        None => tracing::info!("{} movie(s) matched {}", count, query),
    }
}
