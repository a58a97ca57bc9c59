use anyhow::Context;
use clap::{ArgAction, Parser, builder::FalseyValueParser};
use sqlx::postgres::PgPoolOptions;
use tools::{AdminCredentials, AdminSeeder, PgAdminStore, SeedOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seed-admin")]
#[command(about = "Create or update the administrator account", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(long, env = "ADMIN_EMAIL", default_value = "admin@example.com")]
    email: String,

    #[arg(long, env = "ADMIN_PASSWORD", default_value = "password", hide_env_values = true)]
    password: String,

    #[arg(long, env = "ADMIN_NAME", default_value = "Administrator")]
    name: String,

    /// Log the full error chain on failure. Any value of `DEBUG` other than
    /// an empty string, `0`, `false`, `no`, `n`, `f` or `off` enables it.
    #[arg(long, env = "DEBUG", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("seed_admin={0},tools={0}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = seed(&cli).await {
        tracing::error!("Failed to seed admin account: {}", e);
        if cli.debug {
            tracing::error!("{:?}", e);
        }
        return Err(e);
    }

    Ok(())
}

async fn seed(cli: &Cli) -> anyhow::Result<()> {
    let credentials = AdminCredentials {
        email: cli.email.clone(),
        password: cli.password.clone(),
        name: cli.name.clone(),
    };

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&cli.database_url)
        .await
        .context("Failed to connect to database")?;

    let seeder = AdminSeeder::new(PgAdminStore::new(pool));
    let outcome = seeder
        .seed(&credentials)
        .await
        .with_context(|| format!("Failed to provision admin {}", credentials.email))?;

    match outcome {
        SeedOutcome::Created => tracing::info!("✓ Admin account created: {}", credentials.email),
        SeedOutcome::Updated => tracing::info!("✓ Admin account updated: {}", credentials.email),
    }

    Ok(())
}
