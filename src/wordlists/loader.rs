//! Word list loading utilities
//!
//! Builds a `Dictionary` from a file or from the embedded constants.

use crate::core::{Dictionary, Word};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a newline-delimited file
///
/// Words are case-insensitive. Blank lines and lines that are not valid
/// five-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path.as_ref())?;
    let dictionary = dictionary_from_lines(content.lines());
    debug!(
        "loaded {} words from {}",
        dictionary.len(),
        path.as_ref().display()
    );
    Ok(dictionary)
}

/// Convert embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::dictionary_from_slice;
/// use wordle_game::wordlists::DICTIONARY;
///
/// let dictionary = dictionary_from_slice(DICTIONARY);
/// assert_eq!(dictionary.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    dictionary_from_lines(slice.iter().copied())
}

fn dictionary_from_lines<'s>(lines: impl Iterator<Item = &'s str>) -> Dictionary {
    Dictionary::new(lines.filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        match Word::new(trimmed) {
            Ok(word) => Some(word),
            Err(err) => {
                debug!("skipping '{trimmed}': {err}");
                None
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn dictionary_from_slice_converts_valid_words() {
        let dictionary = dictionary_from_slice(&["crate", "react", "trace"]);

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("crate"));
        assert!(dictionary.contains("trace"));
    }

    #[test]
    fn dictionary_from_slice_skips_invalid() {
        let dictionary = dictionary_from_slice(&["crate", "toolong", "abc", "cr4te", "slate"]);

        // Only "crate" and "slate" are valid 5-letter words
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("crate"));
        assert!(dictionary.contains("slate"));
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(dictionary_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_embedded_dictionary() {
        use crate::wordlists::DICTIONARY;

        let dictionary = dictionary_from_slice(DICTIONARY);
        assert_eq!(dictionary.len(), DICTIONARY.len());
    }

    #[test]
    fn load_from_file_is_case_insensitive_and_skips_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "CRATE\n\n  react  \nTrace\ncrate\nnope").unwrap();
        file.flush().unwrap();

        let dictionary = load_from_file(file.path()).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("crate"));
        assert!(dictionary.contains("react"));
        assert!(dictionary.contains("trace"));
        assert!(!dictionary.contains("nope"));
    }

    #[test]
    fn load_from_file_with_only_invalid_lines_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "abc\ncr4te\n\ntoolong").unwrap();
        file.flush().unwrap();

        assert!(load_from_file(file.path()).unwrap().is_empty());
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
