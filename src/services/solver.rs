use log::info;

use crate::services::breakdown::best_guesses;
use crate::services::constraints::Constraints;
use crate::services::filter::filter_words;

/// Outcome of one solve pass over the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Filtering left exactly one candidate.
    Answer(String),
    /// Zero or several candidates remain; suggestions guide the next guess.
    Suggestions {
        valid_words: Vec<String>,
        hard_mode_count: usize,
        suggestions: Vec<String>,
    },
}

/// Filter the dictionary in the requested mode, then try a forced hard-mode
/// pass as a stronger signal before falling back to breakdown suggestions.
/// Suggestions always run over the requested-mode candidates.
pub fn solve(
    dictionary: &[String],
    constraints: &Constraints,
    hard_mode: bool,
    exclude_known_letters: bool,
) -> SolveOutcome {
    let valid_words = filter_words(dictionary, constraints, hard_mode, exclude_known_letters);
    if valid_words.len() == 1 {
        info!("Single candidate after requested-mode filter: {}", valid_words[0]);
        return SolveOutcome::Answer(valid_words[0].clone());
    }

    let hard_mode_words = filter_words(dictionary, constraints, true, exclude_known_letters);
    if hard_mode_words.len() == 1 {
        info!("Single candidate after forced hard-mode filter: {}", hard_mode_words[0]);
        return SolveOutcome::Answer(hard_mode_words[0].clone());
    }

    let suggestions = best_guesses(&valid_words, constraints);
    info!(
        "{} candidates ({} in hard mode), {} suggestions",
        valid_words.len(),
        hard_mode_words.len(),
        suggestions.len()
    );

    SolveOutcome::Suggestions {
        hard_mode_count: hard_mode_words.len(),
        suggestions,
        valid_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_solve_single_candidate_is_the_answer() {
        let dictionary = words(&["apple"]);
        let constraints = Constraints::default();

        let outcome = solve(&dictionary, &constraints, false, false);

        assert_eq!(outcome, SolveOutcome::Answer("apple".to_string()));
    }

    #[test]
    fn test_solve_forced_hard_mode_can_determine_the_answer() {
        // Normal mode ignores greens and keeps both words; the forced
        // hard-mode pass narrows to one and wins.
        let dictionary = words(&["apple", "angle"]);
        let mut constraints = Constraints::default();
        constraints.correct_letters.insert(1, 'p');

        let outcome = solve(&dictionary, &constraints, false, false);

        assert_eq!(outcome, SolveOutcome::Answer("apple".to_string()));
    }

    #[test]
    fn test_solve_reports_both_counts_with_suggestions() {
        let dictionary = words(&["slate", "stale", "least", "crumb"]);
        let mut constraints = Constraints::default();
        constraints.valid_letters.push('s');

        let outcome = solve(&dictionary, &constraints, false, false);

        match outcome {
            SolveOutcome::Suggestions {
                valid_words,
                hard_mode_count,
                suggestions,
            } => {
                // Normal mode keeps everything; hard mode drops "crumb".
                assert_eq!(valid_words.len(), 4);
                assert_eq!(hard_mode_count, 3);
                assert!(suggestions.len() <= 10);
                assert!(suggestions.iter().all(|s| valid_words.contains(s)));
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_empty_dictionary_yields_empty_suggestions() {
        let constraints = Constraints::default();

        let outcome = solve(&[], &constraints, false, false);

        assert_eq!(
            outcome,
            SolveOutcome::Suggestions {
                valid_words: vec![],
                hard_mode_count: 0,
                suggestions: vec![],
            }
        );
    }

    #[test]
    fn test_solve_filtered_to_nothing_is_not_an_error() {
        let dictionary = words(&["apple", "angle"]);
        let mut constraints = Constraints::default();
        constraints.invalid_letters.push('a');

        let outcome = solve(&dictionary, &constraints, false, false);

        assert_eq!(
            outcome,
            SolveOutcome::Suggestions {
                valid_words: vec![],
                hard_mode_count: 0,
                suggestions: vec![],
            }
        );
    }
}
