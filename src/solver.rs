//! The search engine that enumerates word squares from a prefix-indexed pool.
//!
//! A word square is an N x N character grid whose i-th row and i-th column spell the
//! same word. The engine builds squares row by row: after r rows are fixed, column r
//! already contains r characters, and only words starting with exactly those
//! characters can become row r. The [`PrefixIndex`] answers that question in one
//! lookup, so branches with no continuation die immediately.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use magicsq::prefix_index::PrefixIndex;
//! use magicsq::solver;
//! use magicsq::word_list::WordList;
//!
//! let word_list = WordList::parse_from_str("bit\nice\ntea", None)?;
//! let index = PrefixIndex::build(&word_list);
//! let squares = solver::find_squares(&word_list, &index);
//!
//! println!("Found {} squares", squares.len());
//! for square in &squares {
//!     println!("{square}\n");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Parallel Search
//!
//! ```
//! use magicsq::prefix_index::PrefixIndex;
//! use magicsq::solver;
//! use magicsq::word_list::WordList;
//!
//! let word_list = WordList::parse_from_str("card\narea\nrear\ndart", None)?;
//! let index = PrefixIndex::build(&word_list);
//!
//! // Same result set, in the same order, for any thread count.
//! let squares = solver::find_squares_parallel(&word_list, &index, 4);
//! assert_eq!(squares, solver::find_squares(&word_list, &index));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::{debug, info};
use std::fmt;

use crate::prefix_index::{PrefixIndex, WordId};
use crate::word_list::WordList;

/// A complete word square: N rows of N characters where row i and column i spell
/// the same word.
///
/// `Display` renders the grid one row per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    /// Rows top to bottom; by symmetry these are also the columns left to right.
    pub rows: Vec<String>,
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows.join("\n"))
    }
}

/// Context for a `recursive_build` call
struct SearchCtx<'a> {
    index: &'a PrefixIndex,
    words: &'a [String],
    grid: &'a [Vec<char>],
    size: usize,
}

/// Per-word character vectors; `grid[id][pos]` is character `pos` of word `id`.
/// Lets column prefixes index characters in O(1) instead of re-walking UTF-8.
fn char_grid(words: &[String]) -> Vec<Vec<char>> {
    words.iter().map(|w| w.chars().collect()).collect()
}

/// Depth-first recursive construction of word squares.
///
/// `square` holds the rows chosen so far, top to bottom. At depth r the next row is
/// constrained by column r: its first r characters are already fixed by rows 0..r,
/// so only words in that prefix's bucket can extend the square. Candidates are
/// pushed, explored and popped in place; one buffer serves the whole search.
///
/// Parameters:
/// - `square`: the partial solution (row word ids chosen so far).
/// - `results`: completed squares, in discovery order.
/// - `ctx`: search context (prefix index, word table, char grid, target size).
///
/// Placing row r from column r's bucket forces `square[r][i] == square[i][r]` for
/// all i < r, so by induction every emitted square is symmetric: rows and columns
/// spell the same words. No validation pass is needed at the base case.
fn recursive_build(square: &mut Vec<WordId>, results: &mut Vec<Square>, ctx: &SearchCtx) {
    debug_assert!(
        square.len() <= ctx.size,
        "partial square ({}) must never exceed the target size ({})",
        square.len(),
        ctx.size
    );

    if square.len() == ctx.size {
        results.push(Square {
            rows: square.iter().map(|&row| ctx.words[row].clone()).collect(),
        });
        return;
    }

    // Column `depth`, read top to bottom through the rows fixed so far.
    let depth = square.len();
    let column_prefix: String = square.iter().map(|&row| ctx.grid[row][depth]).collect();

    for &candidate in ctx.index.candidates(&column_prefix) {
        square.push(candidate);
        recursive_build(square, results, ctx);
        square.pop();
    }
}

/// Enumerate every word square buildable from the pool.
///
/// Runs the recursive engine once per starting word, in pool order, which makes
/// the discovery order a pure function of the input order.
#[must_use]
pub fn find_squares(word_list: &WordList, index: &PrefixIndex) -> Vec<Square> {
    let grid = char_grid(&word_list.words);
    let ctx = SearchCtx {
        index,
        words: &word_list.words,
        grid: &grid,
        size: word_list.word_len,
    };

    let total = word_list.words.len();
    let mut results = Vec::new();
    let mut square = Vec::with_capacity(ctx.size);
    for start in 0..total {
        debug!("Starting word {}/{}: {}", start + 1, total, ctx.words[start]);
        square.push(start);
        recursive_build(&mut square, &mut results, &ctx);
        square.pop();
    }

    debug!("Search found {} squares", results.len());
    results
}

/// Enumerate every word square using up to `num_threads` worker threads.
///
/// Starting words are split into contiguous chunks in pool order and searched
/// independently: the prefix index and character grid are shared read-only, while
/// each worker fills a private buffer. Buffers are concatenated in chunk order
/// afterward, so the result set is identical to [`find_squares`] for every thread
/// count. Falls back to the sequential engine when one worker would do.
#[must_use]
pub fn find_squares_parallel(
    word_list: &WordList,
    index: &PrefixIndex,
    num_threads: usize,
) -> Vec<Square> {
    let num_workers = num_threads.min(word_list.words.len());
    if num_workers <= 1 {
        return find_squares(word_list, index);
    }

    let words = word_list.words.as_slice();
    let size = word_list.word_len;
    let grid = char_grid(words);
    let grid = grid.as_slice();

    let chunk_len = words.len().div_ceil(num_workers);
    let starts: Vec<WordId> = (0..words.len()).collect();

    info!("Searching with {num_workers} worker threads ({chunk_len} starting words each)");

    let mut buffers: Vec<Vec<Square>> = Vec::with_capacity(num_workers);
    std::thread::scope(|scope| {
        let handles: Vec<_> = starts
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    let ctx = SearchCtx { index, words, grid, size };
                    let mut results = Vec::new();
                    let mut square = Vec::with_capacity(size);
                    for &start in chunk {
                        square.push(start);
                        recursive_build(&mut square, &mut results, &ctx);
                        square.pop();
                    }
                    results
                })
            })
            .collect();

        // Joining in spawn order keeps the merged buffers in pool order, so the
        // parallel output is byte-identical to the sequential output.
        for handle in handles {
            buffers.push(handle.join().expect("search worker panicked"));
        }
    });

    buffers.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> WordList {
        WordList::parse_from_str(&words.join("\n"), None).unwrap()
    }

    fn squares_for(words: &[&str]) -> Vec<Square> {
        let word_list = pool(words);
        let index = PrefixIndex::build(&word_list);
        find_squares(&word_list, &index)
    }

    fn rows(square: &Square) -> Vec<&str> {
        square.rows.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_two_by_two_square() {
        let squares = squares_for(&["ab", "bc"]);

        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), ["ab", "bc"]);
    }

    #[test]
    fn test_word_may_repeat_within_a_square() {
        let squares = squares_for(&["aa"]);

        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), ["aa", "aa"]);
    }

    #[test]
    fn test_three_by_three_square() {
        let squares = squares_for(&["cat", "ate", "tea", "dog"]);

        assert!(squares.iter().any(|s| rows(s) == ["cat", "ate", "tea"]));
    }

    #[test]
    fn test_no_squares_possible() {
        // nothing starts with 'b' or 'e', so both starting words dead-end at depth 1
        let squares = squares_for(&["abc", "def"]);

        assert!(squares.is_empty());
    }

    #[test]
    fn test_size_one_square_per_pool_word() {
        let squares = squares_for(&["a", "b", "a"]);

        // every 1-letter word is trivially its own square; the duplicate counts twice
        assert_eq!(squares.len(), 3);
        assert_eq!(rows(&squares[0]), ["a"]);
        assert_eq!(rows(&squares[1]), ["b"]);
        assert_eq!(rows(&squares[2]), ["a"]);
    }

    #[test]
    fn test_rows_equal_columns_in_every_result() {
        let squares = squares_for(&["aa", "ab", "ba", "bb"]);

        assert!(!squares.is_empty());
        for square in &squares {
            let grid: Vec<Vec<char>> = square.rows.iter().map(|w| w.chars().collect()).collect();
            for i in 0..grid.len() {
                for j in 0..grid.len() {
                    assert_eq!(grid[i][j], grid[j][i], "square {square:?} is not symmetric");
                }
            }
        }
    }

    #[test]
    fn test_discovery_order_is_deterministic() {
        let words = ["aa", "ab", "ba", "bb"];

        assert_eq!(squares_for(&words), squares_for(&words));
    }

    #[test]
    fn test_results_ordered_by_starting_word() {
        let squares = squares_for(&["bb", "aa"]);

        // "bb" comes first in the pool, so its self-square is discovered first
        assert_eq!(rows(&squares[0]), ["bb", "bb"]);
        assert_eq!(rows(&squares[1]), ["aa", "aa"]);
    }

    #[test]
    fn test_pruning_unused_words_changes_nothing() {
        // "qx" can neither start a square (nothing begins with 'x') nor continue
        // one (nothing ends in 'q'), so dropping it must not affect the results
        let with_noise = squares_for(&["aa", "ab", "ba", "bb", "qx"]);
        let without_noise = squares_for(&["aa", "ab", "ba", "bb"]);

        assert_eq!(with_noise, without_noise);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let word_list = pool(&["aa", "ab", "ba", "bb"]);
        let index = PrefixIndex::build(&word_list);
        let sequential = find_squares(&word_list, &index);

        for num_threads in [1, 2, 3, 8] {
            let parallel = find_squares_parallel(&word_list, &index, num_threads);
            assert_eq!(
                parallel, sequential,
                "thread count {num_threads} changed the result set"
            );
        }
    }

    #[test]
    fn test_parallel_with_more_threads_than_words() {
        let word_list = pool(&["ab", "bc"]);
        let index = PrefixIndex::build(&word_list);

        let squares = find_squares_parallel(&word_list, &index, 64);
        assert_eq!(squares.len(), 1);
        assert_eq!(rows(&squares[0]), ["ab", "bc"]);
    }

    #[test]
    fn test_display_renders_rows_on_lines() {
        let squares = squares_for(&["ab", "bc"]);

        assert_eq!(squares[0].to_string(), "ab\nbc");
    }
}
