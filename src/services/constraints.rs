use std::collections::{BTreeMap, HashMap};

use crate::models::GridCell;

/// Accumulated letter knowledge distilled from every feedback row so far.
///
/// `correct_letters` maps a position to its known letter (green feedback),
/// `invalid_positions` lists letters known not to occupy a position (yellow),
/// `valid_letters` holds letters known to appear somewhere in the answer in
/// first-appearance order, and `invalid_letters` holds letters known to be
/// absent from the answer entirely (gray).
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub correct_letters: BTreeMap<usize, char>,
    pub invalid_positions: HashMap<usize, Vec<char>>,
    pub valid_letters: Vec<char>,
    pub invalid_letters: Vec<char>,
}

impl Constraints {
    /// Fold a feedback grid into a constraint set, walking rows in order and
    /// columns in order. Cells with an empty letter or status contribute
    /// nothing; a cell whose letter holds more than one character is
    /// truncated to its first character after lowercasing. A later "correct"
    /// cell overwrites an earlier one at the same column. Contradictory
    /// feedback is not validated; it simply narrows the candidate pool
    /// further than a consistent input would.
    pub fn from_grid(grid: &[Vec<GridCell>]) -> Self {
        let mut constraints = Constraints::default();

        for row in grid {
            for (col, cell) in row.iter().enumerate() {
                let Some(letter) = cell.letter.to_lowercase().chars().next() else {
                    continue;
                };
                match cell.status.as_str() {
                    "correct" => {
                        constraints.correct_letters.insert(col, letter);
                    }
                    "present" => {
                        constraints
                            .invalid_positions
                            .entry(col)
                            .or_default()
                            .push(letter);
                        if !constraints.valid_letters.contains(&letter) {
                            constraints.valid_letters.push(letter);
                        }
                    }
                    "absent" => {
                        constraints.invalid_letters.push(letter);
                    }
                    _ => {}
                }
            }
        }

        constraints
    }
}
