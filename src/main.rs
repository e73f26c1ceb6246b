mod commands;
mod constants;
mod database;
mod error;
mod models;
mod services;
mod utils;

use std::io::Write;

use chrono_tz::Tz;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info, warn};

use crate::{
    commands::{EXIT_COMMANDS, get_command},
    constants::{DEFAULT_DATABASE_URL, DEFAULT_TIMEZONE, LOG_DIRECTIVE},
    database::Database,
    models::{AddressBook, Error},
    utils::{
        messages::{build_invalid_command, build_save_error, describe_error},
        string_utils::{is_empty_or_whitespace, parse_input},
        timezone::{parse_timezone, today_in},
    },
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database
    let db = match Database::new(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // Starting empty after a failed load would overwrite the saved book on exit
    let mut book = match db.load_book().await {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load contacts from database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_session(&db, &mut book, &config.timezone).await {
        error!("Session error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    database_url: String,
    timezone: Tz,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Error> {
    let database_url = std::env::var("CONTACTS_DATABASE_URL")
        .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let timezone_name =
        std::env::var("CONTACTS_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
    let timezone = parse_timezone(&timezone_name)?;

    info!("Using database {} and timezone {}", database_url, timezone);

    Ok(Config {
        database_url,
        timezone,
    })
}

/// Print a prompt and read the next line, `None` at end of input
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> Result<Option<String>, Error> {
    print!("{}", text);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

/// Interactive command loop
async fn run_session(db: &Database, book: &mut AddressBook, timezone: &Tz) -> Result<(), Error> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Welcome to the assistant bot!");
    if !book.is_empty() {
        println!("Contact book successfully loaded ({} contacts).", book.len());
    }

    loop {
        let Some(line) = prompt(&mut lines, "Enter a command: ").await? else {
            info!("End of input, leaving without saving");
            println!("Good bye!");
            return Ok(());
        };
        let Some((command, args)) = parse_input(&line) else {
            continue;
        };

        if EXIT_COMMANDS.contains(&command.as_str()) {
            let decision = prompt(&mut lines, "Do you want to save changes? Y/N [Y]: ")
                .await?
                .unwrap_or_default();
            if is_empty_or_whitespace(&decision) || decision.trim().eq_ignore_ascii_case("y") {
                match db.save_book(book).await {
                    Ok(()) => println!("Changes saved, good bye!"),
                    Err(e) => {
                        error!("Failed to save contacts: {}", e);
                        println!("{}", build_save_error());
                    }
                }
            } else {
                println!("Good bye!");
            }
            return Ok(());
        }

        let Some(handler) = get_command(&command) else {
            println!("{}", build_invalid_command());
            continue;
        };

        match handler(book, &args, today_in(timezone)) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                warn!("Command '{}' failed: {}", command, e);
                println!("{}", describe_error(&e));
            }
        }
    }
}
