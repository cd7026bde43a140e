use crate::services::constraints::Constraints;

/// Narrow the dictionary to words consistent with the accumulated
/// constraints, preserving dictionary order.
///
/// Greens (`correct_letters`) are only enforced in hard mode; normal mode
/// filters on gray letters and per-position yellows alone. That asymmetry is
/// intentional, not an oversight.
pub fn filter_words(
    words: &[String],
    constraints: &Constraints,
    hard_mode: bool,
    exclude_known_letters: bool,
) -> Vec<String> {
    let mut valid_words = Vec::new();

    'word: for word in words {
        // Hard mode: every known-present letter must occur somewhere.
        if hard_mode {
            for &letter in &constraints.valid_letters {
                if !word.contains(letter) {
                    continue 'word;
                }
            }
        }

        for (i, letter) in word.chars().enumerate() {
            // Letter is known absent from the answer.
            if constraints.invalid_letters.contains(&letter) {
                continue 'word;
            }

            // Letter is known not to sit at this position.
            if constraints
                .invalid_positions
                .get(&i)
                .is_some_and(|letters| letters.contains(&letter))
            {
                continue 'word;
            }

            // Hard mode: greens must match exactly.
            if hard_mode {
                if let Some(&expected) = constraints.correct_letters.get(&i) {
                    if expected != letter {
                        continue 'word;
                    }
                }
            }

            // Discovery mode: reject anything reusing a known-present letter.
            if exclude_known_letters && constraints.valid_letters.contains(&letter) {
                continue 'word;
            }
        }

        valid_words.push(word.clone());
    }

    valid_words
}
