use actix_web::{web, App, HttpServer};
use clap::{Arg, Command};
use log::info;
use std::fs::OpenOptions;

mod handlers;
mod models;
mod services;

use handlers::solve::solve_puzzle;
use handlers::wordlist::get_wordlist;
use models::AppState;
use services::word_loader::load_wordlist;

fn init_logging(log_file: Option<&String>) {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .expect("Failed to open log file");

        env_logger::Builder::new()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let matches = Command::new("hintd")
        .version("1.0")
        .about("Constraint filtering and guess suggestion service for Wordle-style games")
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:5001")
                .help("Specify the listen address (e.g., 0.0.0.0:5001)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("wordlist")
                .long("wordlist")
                .num_args(1)
                .default_value("./share/wordlist.txt")
                .help("Path to the newline-delimited dictionary file"),
        )
        .get_matches();

    let listen_host = matches
        .get_one::<String>("listen-host")
        .expect("listen-host argument must always have a default value")
        .clone();
    let log_file = matches.get_one::<String>("log-file");
    let wordlist_path = matches.get_one::<String>("wordlist").unwrap();

    init_logging(log_file);

    let dictionary = load_wordlist(wordlist_path)?;
    info!("Serving {} words on {}", dictionary.len(), listen_host);

    let state = AppState { dictionary };
    let shared_state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .service(solve_puzzle)
            .service(get_wordlist)
    })
    .bind(&listen_host)?
    .run()
    .await
}
