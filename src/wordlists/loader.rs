//! Word list loading utilities
//!
//! Reads plain-text word lists from disk into candidate stores.

use crate::solver::CandidateStore;
use log::info;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Load a word list file
///
/// Lines that are not 5-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let store = load_from_file("data/good.txt").unwrap();
/// println!("Loaded {} words", store.size());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<CandidateStore> {
    let path = path.as_ref();
    let store = CandidateStore::load(BufReader::new(File::open(path)?))?;
    info!("loaded {} words from {}", store.size(), path.display());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_reads_valid_words() {
        let path = std::env::temp_dir().join(format!("wordle_assist_{}.txt", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "crane\nslate\n# comment\nirate\n").unwrap();
        }

        let store = load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(store.size(), 3);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
