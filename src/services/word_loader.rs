use std::fs::File;
use std::io::{self, BufRead};

use log::info;

/// Load the dictionary from a newline-delimited file, preserving file order.
/// Dictionary order drives suggestion ordering and tie-breaks downstream.
/// Words are trimmed and lowercased; blank lines are skipped. Word length is
/// not validated; the file is trusted to be uniform.
pub fn load_wordlist(file_path: &str) -> io::Result<Vec<String>> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_lowercase());
        }
    }

    info!("Loaded {} words from {}", words.len(), file_path);
    Ok(words)
}
