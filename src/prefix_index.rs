//! `prefix_index`: index from word prefixes to candidate words.
//!
//! Built once per word pool, before the search starts. Each word is registered under
//! every one of its prefixes, from the empty string up to and including the full word,
//! so a pool of M words of length N produces M * (N + 1) registrations. The search
//! then answers "which words start with these characters?" with a single lookup
//! instead of a pass over the pool.
//!
//! Candidate lists preserve pool order, which keeps the whole pipeline deterministic.

use std::collections::HashMap;

use crate::word_list::WordList;

/// Identifier of a word in the pool: its position in `WordList::words`.
pub type WordId = usize;

/// Mapping from prefix string to the ids of all pool words sharing that prefix.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    buckets: HashMap<String, Vec<WordId>>,
}

impl PrefixIndex {
    /// Build the index for a word pool.
    #[must_use]
    pub fn build(word_list: &WordList) -> PrefixIndex {
        let mut buckets: HashMap<String, Vec<WordId>> = HashMap::new();

        for (id, word) in word_list.words.iter().enumerate() {
            // k = 0 registers every word under the empty prefix
            for k in 0..=word_list.word_len {
                let prefix: String = word.chars().take(k).collect();
                buckets.entry(prefix).or_default().push(id);
            }
        }

        let index = PrefixIndex { buckets };
        log::debug!(
            "Built prefix index: {} buckets for {} words",
            index.buckets.len(),
            word_list.words.len()
        );
        index
    }

    /// All pool words starting with `prefix`, in pool order.
    ///
    /// An unknown prefix yields an empty slice; dead-ending a search branch
    /// costs one hash lookup and no allocation.
    #[must_use]
    pub fn candidates(&self, prefix: &str) -> &[WordId] {
        self.buckets.get(prefix).map_or(&[], Vec::as_slice)
    }
}
