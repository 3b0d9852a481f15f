use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use storefront::connector::api::controller::ChatController;
use storefront::connector::api::{Container, ContainerConfig, Router};
use storefront::connector::http;
use storefront::Commands;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory containing products.json and niches.json
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: String,

    #[arg(long, global = true, default_value = "~/.storefront/wishlist.json")]
    wishlist: String,

    /// Answer chat requests with a canned reply instead of calling Gemini
    #[arg(long, global = true)]
    mock_completion: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // .env.local wins over .env; neither has to exist.
    if let Ok(path) = dotenvy::from_filename(".env.local") {
        debug!("Loaded environment from {}", path.display());
    }
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    let config = ContainerConfig {
        data_dir: expand_tilde(&cli.data_dir),
        wishlist_path: expand_tilde(&cli.wishlist),
        mock_completion: cli.mock_completion,
    };

    match cli.command {
        Commands::Serve { port, public } => {
            let ip = if public {
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            } else {
                IpAddr::V4(Ipv4Addr::LOCALHOST)
            };
            let container = Arc::new(Container::new(config)?);
            http::serve(container, SocketAddr::new(ip, port)).await?;
        }
        Commands::Ask { message, endpoint } => {
            let output = ChatController::new(endpoint).ask(&message).await?;
            println!("{}", output);
        }
        Commands::Chat { endpoint } => {
            ChatController::new(endpoint).interactive().await?;
        }
        command => {
            let container = Container::new(config)?;
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
