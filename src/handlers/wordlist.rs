use actix_web::{get, web, HttpResponse, Responder};
use log::info;

use crate::models::{AppState, WordlistResponse};

#[get("/api/wordlist")]
pub async fn get_wordlist(data: web::Data<AppState>) -> impl Responder {
    info!("Wordlist requested ({} words)", data.dictionary.len());

    HttpResponse::Ok().json(WordlistResponse {
        success: true,
        count: data.dictionary.len(),
        words: data.dictionary.clone(),
    })
}
