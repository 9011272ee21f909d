use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ygo_deck::resolver::CachingResolver;
use ygo_deck::{AnalyzerConfig, CardCatalog, DeckAnalyzer, DeckService, MetaProfile, ResolveConfig};

#[derive(Parser, Debug)]
#[command(name = "ygo-deck", version, about = "Analyze Yu-Gi-Oh! decklists")]
struct Cli {
    /// Card catalog JSON (YGOPRODeck card-info dump or a plain array)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Resolver cache snapshot, loaded before and saved after the command
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Resolver limits JSON
    #[arg(long, global = true)]
    resolve_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a decklist file and print the response as JSON
    Analyze {
        /// Decklist text file
        #[arg(long)]
        deck: PathBuf,

        /// Meta profile overlay JSON
        #[arg(long)]
        meta: Option<PathBuf>,

        /// Analyzer configuration JSON
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a card with its rulings as JSON
    Card {
        /// Card name
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ygo_deck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let catalog_path = cli.catalog.as_deref().context("--catalog is required")?;
    let catalog = CardCatalog::from_json_file(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let resolver = Arc::new(CachingResolver::new(catalog));

    if let Some(path) = &cli.snapshot {
        if path.exists() {
            resolver
                .load_snapshot(path)
                .await
                .with_context(|| format!("loading snapshot {}", path.display()))?;
        }
    }

    let resolve_config = match &cli.resolve_config {
        Some(path) => ResolveConfig::from_json_file(path)?,
        None => ResolveConfig::default(),
    };

    let output = match cli.command {
        Command::Analyze { deck, meta, config } => {
            let analyzer = build_analyzer(meta.as_deref(), config.as_deref())?;
            let text = tokio::fs::read_to_string(&deck)
                .await
                .with_context(|| format!("reading decklist {}", deck.display()))?;
            let service = DeckService::new(Arc::clone(&resolver))
                .with_analyzer(analyzer)
                .with_resolve_config(resolve_config);
            serde_json::to_string_pretty(&service.analyze_deck(&text).await)?
        }
        Command::Card { name } => {
            let service = DeckService::new(Arc::clone(&resolver)).with_resolve_config(resolve_config);
            serde_json::to_string_pretty(&service.get_card_details(&name).await)?
        }
    };

    if let Some(path) = &cli.snapshot {
        resolver
            .save_snapshot(path)
            .await
            .with_context(|| format!("saving snapshot {}", path.display()))?;
    }

    println!("{output}");
    Ok(())
}

fn build_analyzer(meta: Option<&Path>, config: Option<&Path>) -> anyhow::Result<DeckAnalyzer> {
    let config = match config {
        Some(path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::default(),
    };
    let meta = match meta {
        Some(path) => MetaProfile::from_json_file(path)?,
        None => MetaProfile::builtin(),
    };
    Ok(DeckAnalyzer::new(config).with_meta(meta))
}
