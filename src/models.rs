use serde::{Deserialize, Serialize};

/// Application state shared across all handlers. The dictionary is loaded
/// once at startup and never mutated; every request reads the same ordered
/// word list.
pub struct AppState {
    pub dictionary: Vec<String>,
}

/// One cell of the feedback grid. `status` is one of "correct", "present",
/// "absent", or empty for an unfilled cell.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridCell {
    #[serde(default)]
    pub letter: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub grid: Vec<Vec<GridCell>>,
    #[serde(default)]
    pub hard_mode: bool,
    #[serde(default)]
    pub exclude_known_letters: bool,
}

#[derive(Serialize)]
pub struct SolveResponse {
    pub success: bool,
    pub valid_words_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_mode_count: Option<usize>,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_source: Option<String>,
    pub valid_words: Vec<String>,
    pub answer_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct WordlistResponse {
    pub success: bool,
    pub words: Vec<String>,
    pub count: usize,
}
