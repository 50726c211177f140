//! hedonic — front end for the Boston house-price predictor service.
//!
//! Run with: cargo run -p hedonic-app -- [features | health | key=value ...]

mod collect;
mod config;
mod render;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hedonic_client::PredictionClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("features") {
        render::print_feature_table();
        return Ok(());
    }

    let config = config::Config::load()?;
    info!(base_url = %config.api.base_url, "using prediction endpoint");
    let client = PredictionClient::new(&config.api.client_config())?;

    if args.first().map(String::as_str) == Some("health") {
        return match client.health().await {
            Ok(()) => {
                println!("API is healthy!");
                Ok(())
            }
            Err(err) => {
                render::print_error(&err);
                std::process::exit(1);
            }
        };
    }

    let features = collect::collect(&args)?;
    match client.predict(&features).await {
        Ok(price) => {
            render::print_prediction(price);
            render::print_radar(&features);
            Ok(())
        }
        Err(err) => {
            // Non-fatal to another attempt; just this invocation fails.
            render::print_error(&err);
            std::process::exit(1);
        }
    }
}
