use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "foodboard")]
#[command(about = "Foodboard - manage a restaurant menu kept on a REST food collection", long_about = None)]
struct Cli {
    /// Base URL of the API (overrides FOODBOARD_API_URL and config.toml)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every food
    List,
    /// Add a new food (it starts out available)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: f64,
        /// Image URL
        #[arg(long)]
        image: String,
    },
    /// Edit an existing food; only the given fields change
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        available: Option<bool>,
    },
    /// Delete a food
    Delete { id: i64 },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("foodboard=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let dashboard = commands::open_dashboard(cli.api_url.as_deref()).await?;

    match cli.command {
        Commands::List => {}
        Commands::Add {
            name,
            description,
            price,
            image,
        } => commands::foods::add(&dashboard, name, description, price, image).await?,
        Commands::Edit {
            id,
            name,
            description,
            price,
            image,
            available,
        } => {
            let edits = commands::foods::edits_from_args(name, description, price, image, available);
            commands::foods::edit(&dashboard, id, edits).await?
        }
        Commands::Delete { id } => commands::foods::delete(&dashboard, id).await?,
    }

    commands::render::print_foods(&dashboard.foods().await);

    Ok(())
}
