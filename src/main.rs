use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tubelens::cli::{commands, Cli, Commands};
use tubelens::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs on stderr; stdout carries the JSON result
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Transcript { video_id, lang } => {
            commands::transcript(&config.scrape, &video_id, &lang).await?;
        }
        Commands::ChannelVideos { channel, limit } => {
            commands::channel_videos(&config.scrape, &channel, limit).await?;
        }
        Commands::ChannelSearch {
            channel,
            query,
            limit,
        } => {
            commands::channel_search(&config.scrape, &channel, &query, limit).await?;
        }
        Commands::Comments {
            video_id,
            limit,
            sort,
        } => {
            commands::comments(&config.scrape, &video_id, limit, sort.into()).await?;
        }
        Commands::Metadata {
            video_id,
            no_expand,
        } => {
            commands::metadata(&config.scrape, &video_id, !no_expand).await?;
        }
        Commands::Search {
            query,
            max_results,
            types,
        } => {
            commands::search(&config.scrape, &query, max_results, &[types.into()]).await?;
        }
    }

    Ok(())
}
