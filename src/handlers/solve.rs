use actix_web::{post, web, HttpResponse, Responder};
use log::info;

use crate::models::{AppState, SolveRequest, SolveResponse};
use crate::services::constraints::Constraints;
use crate::services::solver::{solve, SolveOutcome};

/// Candidate lists larger than this are omitted from the response entirely;
/// smaller lists are echoed up to `VALID_WORDS_ECHO_TAKE` entries.
const VALID_WORDS_ECHO_LIMIT: usize = 100;
const VALID_WORDS_ECHO_TAKE: usize = 50;

#[post("/api/solve")]
pub async fn solve_puzzle(
    data: web::Data<AppState>,
    request: web::Json<SolveRequest>,
) -> impl Responder {
    let constraints = Constraints::from_grid(&request.grid);
    info!(
        "Solve request: {} grid rows, hard_mode={}, exclude_known_letters={}",
        request.grid.len(),
        request.hard_mode,
        request.exclude_known_letters
    );

    let outcome = solve(
        &data.dictionary,
        &constraints,
        request.hard_mode,
        request.exclude_known_letters,
    );

    match outcome {
        SolveOutcome::Answer(word) => HttpResponse::Ok().json(SolveResponse {
            success: true,
            valid_words_count: 1,
            hard_mode_count: None,
            suggestions: vec![word.clone()],
            suggestion_source: None,
            valid_words: vec![word.clone()],
            answer_found: true,
            message: Some(format!(
                "Only one possible word remains: {}",
                word.to_uppercase()
            )),
        }),
        SolveOutcome::Suggestions {
            valid_words,
            hard_mode_count,
            suggestions,
        } => {
            let echoed: Vec<String> = if valid_words.len() <= VALID_WORDS_ECHO_LIMIT {
                valid_words
                    .iter()
                    .take(VALID_WORDS_ECHO_TAKE)
                    .cloned()
                    .collect()
            } else {
                Vec::new()
            };

            HttpResponse::Ok().json(SolveResponse {
                success: true,
                valid_words_count: valid_words.len(),
                hard_mode_count: Some(hard_mode_count),
                suggestions,
                suggestion_source: Some("normal_mode".to_string()),
                valid_words: echoed,
                answer_found: false,
                message: None,
            })
        }
    }
}
