use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storage::formatting::{censor_nik, indonesian_long_date};
use tools::{CardClient, reports::render_winner_report_file};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "registrar")]
#[command(about = "Participant cards and winner reports from the command line", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "API_BASE_URL", default_value = "http://localhost:8000")]
    api_base_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::Args)]
struct CardTarget {
    #[arg(long)]
    event: Uuid,

    #[arg(long)]
    participant: Uuid,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a participant's card data
    CardData {
        #[command(flatten)]
        target: CardTarget,
    },
    /// Fetch the card for inline viewing and store it in the temp directory
    PreviewCard {
        #[command(flatten)]
        target: CardTarget,
    },
    /// Download the card PDF
    DownloadCard {
        #[command(flatten)]
        target: CardTarget,

        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
    /// Render a winner list PDF from a JSON export
    WinnersPdf {
        input: PathBuf,

        #[arg(long, default_value = "daftar-pemenang.pdf")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("registrar={0},tools={0},documents={0}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::CardData { target } => {
            let client = CardClient::new(&cli.api_base_url)?;
            let card = client.get_card_data(target.event, target.participant).await?;

            let date = card
                .event
                .event_date
                .map(indonesian_long_date)
                .unwrap_or_default();

            tracing::info!("Event:       {} ({})", card.event.name, date);
            tracing::info!("Participant: {}", card.participant.name);
            tracing::info!("Reg. number: {}", card.participant.registration_number);
            tracing::info!("NIK:         {}", censor_nik(&card.participant.nik));
            if let Some(institution) = &card.participant.institution {
                tracing::info!("Institution: {}", institution);
            }
        }
        Commands::PreviewCard { target } => {
            let client = CardClient::new(&cli.api_base_url)?;
            let document = client.preview_card(target.event, target.participant).await?;

            let path = std::env::temp_dir().join(&document.filename);
            document.save(&path).await?;
            tracing::info!("Preview written to {}", path.display());
        }
        Commands::DownloadCard { target, output } => {
            let client = CardClient::new(&cli.api_base_url)?;
            let document = client.download_card(target.event, target.participant).await?;

            let path = if output.is_dir() {
                output.join(&document.filename)
            } else {
                output
            };
            document.save(&path).await?;
            tracing::info!("✓ Card saved to {}", path.display());
        }
        Commands::WinnersPdf { input, output } => {
            tracing::info!("Loading winner export from: {}", input.display());
            let prizes = render_winner_report_file(&input, &output).await?;
            tracing::info!("✓ Winner list with {} prize(s) written to {}", prizes, output.display());
        }
    }

    Ok(())
}
