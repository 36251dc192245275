//! Random word sourcing.
//!
//! The game treats its word supplier as an opaque, fallible collaborator:
//! ask for N words, get back a batch or an error. The default bank is a
//! word list compiled into the binary; `--words-file` swaps in a
//! user-provided list.

use rand::seq::SliceRandom;
use rand::RngCore;
use std::fs;
use std::io;
use std::path::Path;
use wordsearch_core::parse_words;

/// Embedded word list; one uppercase word per line.
const EMBEDDED: &str = include_str!("../data/words.txt");

/// An opaque provider of random words. Failures are expected to be caught
/// and surfaced by the caller, leaving its word list unchanged.
pub trait WordSource {
    fn random_words(&self, count: usize, rng: &mut dyn RngCore) -> io::Result<Vec<String>>;
}

/// A fixed pool of words sampled without replacement.
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// The built-in word list.
    pub fn embedded() -> Self {
        Self {
            words: parse_words(EMBEDDED, &[]),
        }
    }

    /// A bank read from a file: one word (or comma-separated group) per
    /// line, cleaned the same way manual input is.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let words = parse_words(&content, &[]);
        if words.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "word file contains no usable words",
            ));
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordBank {
    fn random_words(&self, count: usize, rng: &mut dyn RngCore) -> io::Result<Vec<String>> {
        if self.words.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "word bank is empty",
            ));
        }

        Ok(self
            .words
            .choose_multiple(rng, count.min(self.words.len()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn embedded_bank_is_well_formed() {
        let bank = WordBank::embedded();
        assert!(bank.len() > 100);
        for word in &bank.words {
            assert!(word.chars().count() > 1, "{word} too short");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "{word} not uppercase ASCII"
            );
        }
    }

    #[test]
    fn samples_are_distinct_and_sized() {
        let bank = WordBank::embedded();
        let mut rng = StdRng::seed_from_u64(17);
        let batch = bank.random_words(8, &mut rng).unwrap();

        assert_eq!(batch.len(), 8);
        let mut deduped = batch.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), batch.len());
    }

    #[test]
    fn oversized_requests_are_capped() {
        let bank = WordBank::embedded();
        let mut rng = StdRng::seed_from_u64(1);
        let batch = bank.random_words(10_000, &mut rng).unwrap();
        assert_eq!(batch.len(), bank.len());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(WordBank::from_file("/definitely/not/here.txt").is_err());
    }
}
