use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use gallery::{GalleryConfig, GalleryElement, PosterRenderer, render_page};
use omdb_client::{DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_SEARCH};
use std::path::PathBuf;
use tracing::info;

/// Poster Gallery - render OMDb search results as a poster wall
#[derive(Parser)]
#[command(name = "poster-gallery")]
#[command(about = "Fetch movie search results and render their posters into an HTML page", long_about = None)]
struct Cli {
    /// Root URL of the movie search API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Search term
    #[arg(long, default_value = DEFAULT_SEARCH)]
    search: String,

    /// API key sent with the search
    #[arg(long, default_value = DEFAULT_API_KEY)]
    api_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the poster gallery as an HTML page
    Render {
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the movies that would be rendered, in order
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = GalleryConfig {
        base_url: cli.base_url,
        search: cli.search,
        api_key: cli.api_key,
        ..Default::default()
    };

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Render { output } => handle_render(&config, output).await?,
        Commands::List => handle_list(&config).await?,
    }

    Ok(())
}

/// Handle the 'render' command
///
/// A failed fetch still produces a page, just with an empty gallery.
async fn handle_render(config: &GalleryConfig, output: Option<PathBuf>) -> Result<()> {
    let client = config.client().context("Failed to build HTTP client")?;
    let renderer = PosterRenderer::new(client);

    let mut container = GalleryElement::new(config.container_id.clone());
    renderer.render_into(&mut container).await;

    let page = render_page(&container, "Poster Gallery");
    match output {
        Some(path) => {
            std::fs::write(&path, page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} posters to {}", container.len(), path.display());
        }
        None => print!("{page}"),
    }
    Ok(())
}

/// Handle the 'list' command
async fn handle_list(config: &GalleryConfig) -> Result<()> {
    let client = config.client().context("Failed to build HTTP client")?;
    let renderer = PosterRenderer::new(client);

    let movies = renderer
        .selected_movies()
        .await
        .with_context(|| format!("Failed to search for '{}'", config.search))?;

    println!(
        "{}",
        format!("Posters for '{}':", config.search).bold().blue()
    );
    for (rank, movie) in movies.iter().enumerate() {
        let poster = if movie.has_poster() {
            movie.poster.normal()
        } else {
            movie.poster.dimmed()
        };
        println!(
            "{}. {} ({}) [{}] {}",
            (rank + 1).to_string().green(),
            movie.title,
            movie.year,
            movie.kind,
            poster
        );
    }
    Ok(())
}
