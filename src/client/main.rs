//! Routine Hub command-line client
//!
//! Thin shell over the client library: sign in, browse plans and categories,
//! inspect the recent-search history. Session state persists in the user's
//! data directory between runs.
//!
//! ```bash
//! routine-hub login runner@example.com --password hunter22
//! routine-hub plans
//! routine-hub search "morning run"
//! routine-hub categories top-menu
//! RUST_LOG=debug routine-hub --server http://localhost:8080 me
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand, ValueEnum};
use routine_hub::client::views::PlanSearch;
use routine_hub::client::{AppState, ClientError, Config, FileStore, SearchScope};
use routine_hub::shared::models::CategoryKind;
use routine_hub::shared::AppConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "routine-hub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, short = 'c', env = "ROUTINE_HUB_CONFIG")]
    config: Option<PathBuf>,

    /// Backend base URL (overrides the configuration file)
    #[arg(long)]
    server: Option<String>,

    /// Storage file (defaults to the user's data directory)
    #[arg(long)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and keep the session
    Login {
        email: String,
        #[arg(long, env = "ROUTINE_HUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and forget the session
    Logout,
    /// Show the signed-in user
    Me,
    /// List the default plan feed
    Plans,
    /// Search plans by keyword
    Search { keyword: String },
    /// Show a category list, served from cache when possible
    Categories {
        #[arg(value_enum)]
        kind: Kind,
        /// Fetch even if a cached copy exists
        #[arg(long)]
        refresh: bool,
    },
    /// Show or clear recent searches
    History {
        #[arg(value_enum, default_value = "plans")]
        scope: Scope,
        #[arg(long)]
        clear: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Target,
    Job,
    Icon,
    TopMenu,
}

impl From<Kind> for CategoryKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Target => CategoryKind::Target,
            Kind::Job => CategoryKind::Job,
            Kind::Icon => CategoryKind::Icon,
            Kind::TopMenu => CategoryKind::TopMenu,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scope {
    Plans,
    Users,
    AdminUsers,
}

impl From<Scope> for SearchScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Plans => SearchScope::Plans,
            Scope::Users => SearchScope::Users,
            Scope::AdminUsers => SearchScope::AdminUsers,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, ClientError> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new()?,
    };
    match &cli.server {
        Some(server) => {
            let builder = AppConfig::builder()
                .server_url(server.clone())
                .broker_url(config.broker_url())
                .search_history_limit(config.search_history_limit())
                .request_timeout_secs(config.request_timeout().as_secs());
            Ok(Config::with_builder(builder)?)
        }
        None => Ok(config),
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = load_config(&cli)?;
    let store = match &cli.storage {
        Some(path) => FileStore::open(path)?,
        None => FileStore::open_default()?,
    };
    tracing::debug!("[STORAGE] Using {}", store.path().display());
    let state = AppState::new(config, Arc::new(store))?;

    match cli.command {
        Command::Login { email, password } => {
            let user = state.auth().login(&email, &password).await?;
            println!("Signed in as {} <{}>", user.nickname, user.email);
        }
        Command::Logout => {
            state.auth().logout().await?;
            println!("Signed out");
        }
        Command::Me => {
            let user = state.auth().me().await?;
            println!("{} <{}>", user.nickname, user.email);
            for role in &user.roles {
                println!("  {:?}", role);
            }
        }
        Command::Plans => {
            for plan in state.plans().default_list().await? {
                println!(
                    "#{:<5} {} ({} days, {} likes)",
                    plan.plan_id, plan.title, plan.duration_days, plan.like_count
                );
            }
        }
        Command::Search { keyword } => {
            let search = PlanSearch::new(&state);
            let plans = search.search(&keyword).await?.unwrap_or_default();
            if plans.is_empty() {
                println!("No plans match '{}'", keyword.trim());
            }
            for plan in plans {
                println!("#{:<5} {}", plan.plan_id, plan.title);
            }
        }
        Command::Categories { kind, refresh } => {
            let kind = CategoryKind::from(kind);
            let cache = state.category_cache();
            let list = if refresh {
                cache.revalidate(kind, &state.categories()).await?.0
            } else {
                cache.load(kind, &state.categories()).await?
            };
            for category in list {
                println!("{:<5} {}", category.id, category.name);
            }
        }
        Command::History { scope, clear } => {
            let history = state.search_history(scope.into());
            if clear {
                history.clear()?;
                println!("History cleared");
            } else {
                for term in history.terms() {
                    println!("{}", term);
                }
            }
        }
    }
    Ok(())
}
