use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use sea_orm::Database;

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "League database migration tool")]
struct Args {
    /// Migration command to run
    command: String,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
}

/// Build the owner-level database URL from environment variables.
///
/// Mirrors the backend's config: POSTGRES_HOST/POSTGRES_PORT with defaults,
/// PROD_DB/TEST_DB for the database name, LEAGUE_OWNER_USER/PASSWORD for
/// credentials. The test database name must end with `_test`.
fn owner_db_url(env: &Env) -> Result<String, String> {
    fn must_var(name: &str) -> Result<String, String> {
        std::env::var(name).map_err(|_| format!("Required environment variable '{name}' is not set"))
    }

    let host = std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = match env {
        Env::Prod => must_var("PROD_DB")?,
        Env::Test => {
            let name = must_var("TEST_DB")?;
            if !name.ends_with("_test") {
                return Err(format!(
                    "Test environment requires database name to end with '_test', got '{name}'"
                ));
            }
            name
        }
    };
    let user = must_var("LEAGUE_OWNER_USER")?;
    let password = must_var("LEAGUE_OWNER_PASSWORD")?;

    Ok(format!("postgresql://{user}:{password}@{host}:{port}/{db_name}"))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command.as_str() {
        "up" => MigrationCommand::Up,
        "down" => MigrationCommand::Down,
        "fresh" => MigrationCommand::Fresh,
        "reset" => MigrationCommand::Reset,
        "refresh" => MigrationCommand::Refresh,
        "status" => MigrationCommand::Status,
        other => {
            eprintln!("Unknown command: {other}. Use: up | down | fresh | reset | refresh | status");
            std::process::exit(2);
        }
    };

    let url = match owner_db_url(&args.env) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let db = match Database::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
