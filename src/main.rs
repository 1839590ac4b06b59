//! Shelfwise: prompt-driven book recommendations
//!
//! Usage:
//!   shelfwise              - Open the app on the search view
//!   shelfwise open <path>  - Open the app on a routed path (/, /team, /book/<id>)
//!   shelfwise ask <prompt> - Print recommendations without opening a window
//!   shelfwise help         - Show help

mod app;
mod backend;
mod config;
mod router;
mod ui;
mod views;

use app::Shelfwise;
use backend::RecommendationClient;
use config::SETTINGS;
use iced::{window, Size};
use router::Route;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => launch(Route::Search),
        Some("open") => {
            let path = args.get(2).map(String::as_str).unwrap_or("/");
            launch(Route::parse(path))
        }
        Some("ask") => ask(&args[2..].join(" ")),
        Some("help" | "--help" | "-h") => {
            print_help();
            ExitCode::SUCCESS
        }
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run 'shelfwise help' for usage");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    // try_init so a second call (tests, embedding) is harmless
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn print_help() {
    println!("Shelfwise - book recommendations from a prompt\n");
    println!("Usage: shelfwise [command]\n");
    println!("Commands:");
    println!("  (none)          Open the app on the search view");
    println!("  open <path>     Open the app on /, /team or /book/<id>");
    println!("  ask <prompt>    Print recommendations and exit");
    println!("  help            Show this help message");
    println!("\nEnvironment:");
    println!("  SHELFWISE_API_URL     Recommendation service origin (default {})", config::DEFAULT_API_URL);
    println!("  SHELFWISE_AVATAR_URL  Avatar service (default {})", config::DEFAULT_AVATAR_URL);
    println!("  RUST_LOG              Log filter, e.g. shelfwise=debug");
}

/// One-shot request from the command line
fn ask(prompt: &str) -> ExitCode {
    if prompt.trim().is_empty() {
        eprintln!("Usage: shelfwise ask <prompt>");
        return ExitCode::FAILURE;
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = RecommendationClient::new(&SETTINGS.api_base_url);
    match rt.block_on(client.fetch_recommendations(prompt)) {
        Ok(books) if books.is_empty() => {
            println!("No recommendations");
            ExitCode::SUCCESS
        }
        Ok(books) => {
            for (i, book) in books.iter().enumerate() {
                println!("{:>2}. {} by {} ({}, {}) {:.1}/5", i + 1, book.title, book.author, book.genre, book.year, book.rating);
                if !book.description.is_empty() {
                    println!("    {}", book.description);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn launch(initial: Route) -> ExitCode {
    tracing::info!("Starting Shelfwise at {} (service {})", initial.path(), SETTINGS.api_base_url);

    let settings = SETTINGS.clone();
    let result = iced::application(Shelfwise::title, Shelfwise::update, Shelfwise::view)
        .subscription(Shelfwise::subscription)
        .theme(Shelfwise::theme)
        .window(window::Settings {
            size: Size::new(820.0, 640.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || Shelfwise::new(settings, initial));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}
