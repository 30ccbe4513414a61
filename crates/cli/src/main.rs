//! Solemate CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply the API schema
//! solemate-cli migrate
//!
//! # Load the demo catalog and accounts
//! solemate-cli seed
//!
//! # Create a user
//! solemate-cli user create -e cody@email.com --admin
//! ```
//!
//! The database comes from `API_DATABASE_URL` (or `DATABASE_URL`), the same
//! variables the API server reads.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "solemate-cli")]
#[command(author, version, about = "Solemate CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the demo shoe catalog, categories and accounts
    Seed,
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Grant the admin flag
        #[arg(long)]
        admin: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let pool = commands::connect().await?;

    match cli.command {
        Commands::Migrate => commands::migrate::run(&pool).await?,
        Commands::Seed => {
            commands::seed::run(&pool).await?;
        }
        Commands::User { action } => match action {
            UserAction::Create { email, admin } => {
                commands::user::create(&pool, &email, admin).await?;
            }
        },
    }
    Ok(())
}
