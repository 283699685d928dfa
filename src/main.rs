use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use magicsq::errors::WordListError;
use magicsq::output;
use magicsq::prefix_index::PrefixIndex;
use magicsq::solver;
use magicsq::word_list::WordList;

/// Serialization format for the result set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One row per line, blank line between squares
    Text,
    /// JSON object keyed by square number and row index
    Json,
}

/// Magic square generator: finds every square grid of words that reads the
/// same across and down
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the word list file (one word per line)
    input: String,

    /// Output file path; prints to stdout when omitted
    output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Square size; defaults to the length of the first word in the input
    #[arg(short, long)]
    size: Option<usize>,

    /// Number of search threads
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

/// Entry point of the magicsq CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with a failure code.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("MAGICSQ_DEBUG").is_ok();
    magicsq::log::init_logger(debug_enabled);

    log::info!("Starting magicsq generator");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a WordListError
        if let Some(wl_err) = e.downcast_ref::<WordListError>() {
            eprintln!("Error: {}", wl_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the magicsq CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk, filtering to the target length.
/// 3. Build the prefix index and enumerate every word square.
/// 4. Write the result set to the output destination.
/// 5. Print the square count and performance metrics on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., empty word list, unreadable
/// input file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the word pool from disk, normalizing and length-filtering it
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.input, cli.size)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    log::info!(
        "Loaded {} words of length {}",
        word_list.words.len(),
        word_list.word_len
    );

    // 2. Index the pool and enumerate every square
    let t_search = Instant::now();
    let index = PrefixIndex::build(&word_list);
    let squares = solver::find_squares_parallel(&word_list, &index, cli.threads);
    let search_secs = t_search.elapsed().as_secs_f64();

    log::info!("Search complete: {} squares", squares.len());

    // 3. Serialize the result set to the chosen destination
    write_output(&cli, &squares)?;

    // 4. Print diagnostics (square count, pool size, timings) to stderr
    eprintln!("Number of magic squares: {}", squares.len());
    eprintln!(
        "Loaded {} words in {:.3}s; searched in {:.3}s.",
        word_list.words.len(),
        load_secs,
        search_secs
    );

    Ok(())
}

/// Open the destination (file or stdout) and write the squares in the requested format.
fn write_output(cli: &Cli, squares: &[solver::Square]) -> io::Result<()> {
    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("failed to create output file '{path}': {e}"),
                )
            })?;
            Box::new(io::BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Text => output::write_text(&mut out, squares)?,
        OutputFormat::Json => output::write_json(&mut out, squares)?,
    }

    out.flush()
}
