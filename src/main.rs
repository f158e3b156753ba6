mod catalog;
mod config;
mod icons;
mod loader;
mod parser;
mod query;
mod render;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{error, warn};

use catalog::{Catalog, SourceKind};
use query::{Query, SortKey};
use render::{Render, TermRender};

#[derive(Parser)]
#[command(name = "appcat", about = "Browse catalogs of open source applications")]
struct Cli {
    /// Catalog source: a file path or an http(s) URL
    #[arg(long, global = true)]
    source: Option<String>,
    /// Source format (inferred from the extension when omitted)
    #[arg(long, global = true, value_enum)]
    format: Option<SourceKind>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show catalog totals
    Stats,
    /// List the available category and language filters
    Filters,
    /// List applications, filtered and sorted
    List {
        /// Case-insensitive text search
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by category (exact label)
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by language tag (exact)
        #[arg(short, long)]
        language: Option<String>,
        /// Sort order (JSON catalogs only)
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        /// Max rows to display
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show one application in detail
    Show {
        /// Entry id, e.g. "hex-fiend"
        id: String,
    },
    /// Parse a markdown catalog and write the JSON document
    Export {
        /// Output path
        #[arg(short, long, default_value = "apps.json")]
        out: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = config::Settings::from_env();
    let (source, format) = config::resolve(&settings, cli.source, cli.format);

    let mut out = TermRender::stdout();

    match cli.command {
        Commands::Stats => {
            let catalog = load_or_exit(&source, format, &mut out).await;
            out.stats(&catalog);
        }
        Commands::Filters => {
            let catalog = load_or_exit(&source, format, &mut out).await;
            out.options(&catalog);
        }
        Commands::List {
            search,
            category,
            language,
            sort,
            limit,
        } => {
            let catalog = load_or_exit(&source, format, &mut out).await;
            if sort.is_some() && catalog.source == SourceKind::Markdown {
                warn!("markdown catalogs carry no sort metadata; ignoring --sort");
            }
            let query = Query {
                search: search.unwrap_or_default(),
                category,
                language,
                sort,
            };
            let hits = query::run(&catalog, &query);
            let shown = match limit {
                Some(n) => &hits[..hits.len().min(n)],
                None => &hits[..],
            };
            out.entries(shown, catalog.entries.len());
        }
        Commands::Show { id } => {
            let catalog = load_or_exit(&source, format, &mut out).await;
            render::show_detail(&catalog, &id, &mut out);
        }
        Commands::Export { out: path } => {
            if format != SourceKind::Markdown {
                bail!("export parses markdown; pass a markdown source (--format markdown)");
            }
            let catalog = load_or_exit(&source, format, &mut out).await;
            let document = loader::to_document(&catalog);
            let json = serde_json::to_string_pretty(&document)?;
            std::fs::write(&path, json).with_context(|| format!("failed to write {}", path))?;
            println!("Saved {} apps to {}", catalog.entries.len(), path);
        }
    }

    Ok(())
}

/// Load the catalog or print the user-facing error state and stop. Loading
/// failures are terminal for every command.
async fn load_or_exit(source: &str, format: SourceKind, out: &mut impl Render) -> Catalog {
    match loader::load(source, format).await {
        Ok(catalog) => catalog,
        Err(err) => {
            let err = anyhow::Error::from(err);
            error!("Failed to load catalog from {}: {:#}", source, err);
            out.load_error();
            std::process::exit(1);
        }
    }
}
