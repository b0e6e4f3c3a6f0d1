//! Golf client - Application entry point
//!
//! CLI-based entry point that dispatches to the command modules.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::ClientConfig;
use golf_client::{
    cli::{Cli, Commands},
    commands::{self, App},
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration; flags override the environment
    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url);
    }
    if let Some(path) = cli.session_file {
        config = config.with_session_file(path);
    }
    tracing::debug!(base_url = %config.base_url(), "Configuration loaded");

    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Client setup failed: {}", e);
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Login(args) => commands::account::login(&app, args).await,
        Commands::Register(args) => commands::account::register(&app, args).await,
        Commands::Logout => commands::account::logout(&app).await,
        Commands::Whoami => commands::account::whoami(&app).await,
        Commands::Dashboard(args) => commands::account::dashboard(&app, args).await,
        Commands::Courses(args) => commands::courses::list(&app, args).await,
        Commands::Course { id } => commands::courses::show(&app, &id).await,
        Commands::Conditions { course_id } => {
            commands::courses::conditions(&app, course_id.as_deref()).await
        }
        Commands::Bookings => commands::bookings::list(&app).await,
        Commands::BookTeeTime(args) => commands::bookings::book_tee_time(&app, args).await,
        Commands::CancelBooking { id, range } => commands::bookings::cancel(&app, &id, range).await,
        Commands::Range(args) => commands::range::execute(&app, args).await,
        Commands::Admin(args) => commands::admin::execute(&app, args).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
