use crate::services::constraints::Constraints;

/// Stop pivoting once this many letters have been used up (seeded known
/// letters included). Around five discriminating letters the candidate pool
/// for a five-letter domain is already small.
const PIVOT_LETTER_CAP: usize = 5;

/// Maximum number of suggestions returned to the caller.
const MAX_SUGGESTIONS: usize = 10;

/// One node of the recursive letter-bisection search.
///
/// A node is an immutable snapshot: the current candidate words, the letters
/// already used as pivots (or pre-known), and an index from each remaining
/// letter to the candidates containing it. `advance` consumes the node and
/// returns the next one, so intermediate states are plain values.
#[derive(Debug, Clone)]
pub struct LetterBreakdown {
    words: Vec<String>,
    excluded_letters: Vec<char>,
    // Vec rather than a map: pivot tie-breaking is pinned to the order
    // letters are first encountered while scanning the word list.
    letter_index: Vec<(char, Vec<String>)>,
}

impl LetterBreakdown {
    /// Index every word under each distinct non-excluded letter it contains.
    /// Buckets are deduplicated and keep word order.
    pub fn build(words: Vec<String>, excluded_letters: Vec<char>) -> Self {
        let mut letter_index: Vec<(char, Vec<String>)> = Vec::new();

        for word in &words {
            for letter in word.chars() {
                if excluded_letters.contains(&letter) {
                    continue;
                }
                match letter_index.iter_mut().find(|(l, _)| *l == letter) {
                    Some((_, bucket)) => {
                        if !bucket.contains(word) {
                            bucket.push(word.clone());
                        }
                    }
                    None => letter_index.push((letter, vec![word.clone()])),
                }
            }
        }

        LetterBreakdown {
            words,
            excluded_letters,
            letter_index,
        }
    }

    /// Pick the letter whose bucket comes closest to bisecting the current
    /// word list and recurse into that bucket. Terminal nodes (no indexable
    /// letters left) are returned unchanged. Ties go to the letter
    /// encountered first during construction.
    pub fn advance(self) -> Self {
        if self.letter_index.is_empty() {
            return self;
        }

        let target = self.words.len() as f64 / 2.0;
        let mut best_idx = 0;
        let mut best_distance = f64::INFINITY;
        for (i, (_, bucket)) in self.letter_index.iter().enumerate() {
            let distance = (bucket.len() as f64 - target).abs();
            if distance < best_distance {
                best_distance = distance;
                best_idx = i;
            }
        }

        let (pivot, bucket) = self.letter_index[best_idx].clone();
        // The indexing rule keeps excluded letters out of the index; this
        // guards against that invariant breaking.
        if self.excluded_letters.contains(&pivot) {
            return self;
        }

        let mut excluded_letters = self.excluded_letters;
        excluded_letters.push(pivot);
        LetterBreakdown::build(bucket, excluded_letters)
    }
}

/// Run the breakdown over the candidate pool and return up to ten
/// suggestions. Letters already known to be in the answer are seeded as
/// excluded so they are never re-selected as discriminating pivots.
pub fn best_guesses(valid_words: &[String], constraints: &Constraints) -> Vec<String> {
    let mut excluded_letters: Vec<char> = Vec::new();
    for &letter in &constraints.valid_letters {
        if !excluded_letters.contains(&letter) {
            excluded_letters.push(letter);
        }
    }
    for &letter in constraints.correct_letters.values() {
        if !excluded_letters.contains(&letter) {
            excluded_letters.push(letter);
        }
    }

    let mut node = LetterBreakdown::build(valid_words.to_vec(), excluded_letters);
    while node.excluded_letters.len() < PIVOT_LETTER_CAP && node.words.len() > 1 {
        let rounds_before = node.excluded_letters.len();
        node = node.advance();
        if node.excluded_letters.len() == rounds_before {
            // Terminal node: no letter left to pivot on.
            break;
        }
    }

    node.words.into_iter().take(MAX_SUGGESTIONS).collect()
}
