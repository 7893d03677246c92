//! Nivesh application binary - composition root.
//!
//! Ties the crates together into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing with the resolved log level
//! 3. Open the document store in the resolved data directory
//! 4. Dispatch: interactive chat (default), history, reset, or profile

mod cli;
mod repl;

use clap::Parser;

use nivesh_chat::ConversationController;
use nivesh_core::config::NiveshConfig;
use nivesh_core::error::Result;
use nivesh_core::types::UserProfile;
use nivesh_store::{DocumentStore, ProfileStore, SessionStore};

use cli::{CliArgs, Command, ProfileAction};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config_path = args.resolve_config_path();
    let config = NiveshConfig::load_or_default(&config_path);

    let log_level = args.resolve_log_level(&config.general.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let data_dir = args.resolve_data_dir(&config.general.data_dir);
    tracing::info!(data_dir = %data_dir.display(), "Opening document store");
    let documents = DocumentStore::new(data_dir);

    match args.command {
        None => {
            let store = SessionStore::new(documents);
            let controller = ConversationController::new(store, &config.chat)?;
            repl::run(controller).await
        }
        Some(Command::History) => {
            let store = SessionStore::new(documents);
            let messages = store.load();
            if messages.is_empty() {
                println!("No conversation history.");
            }
            for message in &messages {
                repl::print_message(message);
            }
            Ok(())
        }
        Some(Command::Reset) => {
            let store = SessionStore::new(documents);
            store.clear()?;
            println!("Conversation history cleared.");
            Ok(())
        }
        Some(Command::Profile { action }) => run_profile(ProfileStore::new(documents), action),
    }
}

/// Handle `nivesh profile show|set`.
fn run_profile(store: ProfileStore, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Show => {
            match store.load() {
                Some(profile) => print_profile(&profile),
                None => println!("No profile saved. Use 'nivesh profile set' to create one."),
            }
            Ok(())
        }
        ProfileAction::Set {
            name,
            email,
            monthly_income,
            risk_tolerance,
            investment_interests,
        } => {
            let mut profile = store.load().unwrap_or_default();
            if let Some(name) = name {
                profile.name = name;
            }
            if let Some(email) = email {
                profile.email = email;
            }
            if let Some(income) = monthly_income {
                profile.monthly_income = income;
            }
            if let Some(risk) = risk_tolerance {
                profile.risk_tolerance = risk;
            }
            if let Some(interests) = investment_interests {
                profile.investment_interests = interests;
            }
            store.save(&profile)?;
            println!("Profile saved.");
            print_profile(&profile);
            Ok(())
        }
    }
}

fn print_profile(profile: &UserProfile) {
    println!("Name:            {}", profile.name);
    println!("Email:           {}", profile.email);
    println!("Monthly income:  {}", profile.monthly_income);
    println!("Risk tolerance:  {:?}", profile.risk_tolerance);
    println!("Interests:       {}", profile.investment_interests);
}
