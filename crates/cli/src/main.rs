//! `charlist` - search characters across anime, game, film, wiki and book catalogs
//!
//! Results and lookups are printed to stdout as JSON; logs go to stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog::{
    normalize_source_type, CandidateId, Catalog, CatalogConfig, CharacterList, DetailKind,
    Enrichment, ItemDraft, MediaType, RankedItem, SearchCandidate, SourceType,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "charlist")]
#[command(about = "Multi-source character search")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "CHARLIST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search every source and print the ranked candidates
    Search { query: String },
    /// Resolve the work a character comes from
    Detail {
        /// character | game_character
        kind: DetailKind,
        id: String,
    },
    /// List the cast of a movie or TV show
    Cast {
        /// movie | tv
        media: MediaType,
        id: String,
    },
    /// Search as you type: one input state per stdin line
    Watch,
    /// Search, enrich the chosen candidate and print the prefilled list item
    Pick {
        query: String,
        /// Position of the candidate in the ranked results
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        /// Take the character from this cast member (movies and shows)
        #[arg(long)]
        cast: Option<usize>,
        /// Append the item to this JSON list file, creating it if missing
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Print a saved list, highest rating first
    List {
        path: PathBuf,
        /// Source type to show, or "all"
        #[arg(long, default_value = "all")]
        filter: String,
        /// Author shown on the shared view
        #[arg(long)]
        author: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Picked<'a> {
    candidate: &'a SearchCandidate,
    enrichment: Option<&'a Enrichment>,
    draft: &'a ItemDraft,
    /// Why the draft cannot be saved yet
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid: Option<String>,
}

#[derive(Serialize)]
struct ListView<'a> {
    name: &'a str,
    author: String,
    items: Vec<RankedItem<'a>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref()).await?;
    let catalog = Catalog::from_config(&config).context("Failed to build catalog")?;

    match args.command {
        Command::Search { query } => print_json(&catalog.search(&query).await)?,
        Command::Detail { kind, id } => {
            print_json(&catalog.detail(kind, &CandidateId::parse(&id)).await)?
        }
        Command::Cast { media, id } => {
            print_json(&catalog.cast(media, &CandidateId::parse(&id)).await)?
        }
        Command::Watch => watch(&catalog).await?,
        Command::Pick {
            query,
            index,
            cast,
            save,
        } => pick(&catalog, &query, index, cast, save.as_deref()).await?,
        Command::List {
            path,
            filter,
            author,
        } => {
            let list = load_list(&path).await?;
            let shared = list.share(author.as_deref());
            print_json(&ListView {
                name: list.name(),
                author: shared.author,
                items: list.ranked_view(source_filter(&filter)),
            })?
        }
    }

    Ok(())
}

async fn load_config(path: Option<&std::path::Path>) -> Result<CatalogConfig> {
    let mut config = match path {
        Some(path) => CatalogConfig::load(path)
            .await
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CatalogConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn watch(catalog: &Catalog) -> Result<()> {
    let (session, mut events) = catalog.session();

    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::error!("Failed to encode session event: {}", e),
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        session.submit(line);
    }

    session.close().await;
    printer.await.context("Event printer failed")?;
    Ok(())
}

/// `None` for "all", otherwise the normalized source type
fn source_filter(raw: &str) -> Option<SourceType> {
    if raw.trim().eq_ignore_ascii_case("all") {
        None
    } else {
        Some(normalize_source_type(raw))
    }
}

/// Read a list file; a missing file is a new list named after its stem
async fn load_list(path: &Path) -> Result<CharacterList> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse list {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            CharacterList::new(&name).with_context(|| format!("Cannot name a list after {}", path.display()))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read list {}", path.display())),
    }
}

async fn pick(
    catalog: &Catalog,
    query: &str,
    index: usize,
    cast: Option<usize>,
    save: Option<&Path>,
) -> Result<()> {
    let candidates = catalog.search(query).await;
    let candidate = candidates.get(index).with_context(|| {
        format!(
            "No candidate at position {} ({} results for '{}')",
            index,
            candidates.len(),
            query
        )
    })?;

    let enrichment = catalog.enrich(candidate).await;
    let mut draft = ItemDraft::prefill(candidate, enrichment.as_ref());

    if let Some(position) = cast {
        let member = match &enrichment {
            Some(Enrichment::Cast(members)) => members.get(position),
            _ => None,
        }
        .with_context(|| format!("No cast member at position {}", position))?;
        draft.choose_cast(member);
    }

    print_json(&Picked {
        candidate,
        enrichment: enrichment.as_ref(),
        draft: &draft,
        invalid: draft.validate().err().map(|e| e.to_string()),
    })?;

    if let Some(path) = save {
        let mut list = load_list(path).await?;
        let position = list.add(draft).context("Item not saved")?;
        tokio::fs::write(path, serde_json::to_string_pretty(&list)?)
            .await
            .with_context(|| format!("Failed to write list {}", path.display()))?;
        tracing::info!("Saved item #{} to '{}'", position + 1, list.name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_and_cast() {
        let args = Args::try_parse_from(["charlist", "detail", "game_character", "1052"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Detail { kind: DetailKind::GameCharacter, ref id } if id == "1052"
        ));

        let args = Args::try_parse_from(["charlist", "cast", "tv", "1396"]).unwrap();
        assert!(matches!(args.command, Command::Cast { media: MediaType::Tv, .. }));

        assert!(Args::try_parse_from(["charlist", "cast", "podcast", "1"]).is_err());
    }

    #[test]
    fn test_parse_pick() {
        let args =
            Args::try_parse_from(["charlist", "pick", "breaking bad", "--index", "2", "--cast", "0"])
                .unwrap();
        match args.command {
            Command::Pick {
                query,
                index,
                cast,
                save,
            } => {
                assert_eq!(query, "breaking bad");
                assert_eq!(index, 2);
                assert_eq!(cast, Some(0));
                assert_eq!(save, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list() {
        let args = Args::try_parse_from(["charlist", "list", "faves.json", "--filter", "tv show"]).unwrap();
        match args.command {
            Command::List { path, filter, author } => {
                assert_eq!(path, PathBuf::from("faves.json"));
                assert_eq!(source_filter(&filter), Some(SourceType::TvShow));
                assert_eq!(author, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert_eq!(source_filter("All"), None);
        assert_eq!(source_filter("game"), Some(SourceType::Game));
    }

    #[tokio::test]
    async fn test_missing_list_file_starts_empty() {
        let path = std::env::temp_dir().join("charlist-missing-villains.json");
        let list = load_list(&path).await.unwrap();
        assert_eq!(list.name(), "charlist-missing-villains");
        assert!(list.is_empty());
    }
}
