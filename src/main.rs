use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use pokedex::localize::Enricher;
use pokedex::model::{CardDescriptor, EntryId, ViewerConfig};
use pokedex::overlay::DetailOverlay;
use pokedex::prefs::{PrefsStore, SEARCH_KEY};
use pokedex::remote::{RemoteClient, load_catalog};
use pokedex::viewer::Viewer;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse the Pokémon catalog", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Debug)]
struct GlobalArgs {
    /// Directory holding config.json, prefs.json and pokedex.log
    #[arg(long, global = true, default_value = ".pokedex")]
    data_dir: PathBuf,

    /// Catalog API root (e.g. https://pokeapi.co/api/v2)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Number of entries requested from the list endpoint
    #[arg(long, global = true)]
    limit: Option<u32>,

    /// Language used for localized names and descriptions
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Cards per page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Search debounce window in milliseconds
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,

    /// Cache localized text for the lifetime of the process
    #[arg(long, global = true)]
    cache_localized: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the catalog and print rendered pages of cards
    List {
        /// Search query (defaults to the saved search)
        #[arg(long)]
        query: Option<String>,
        /// Number of pages to render
        #[arg(long, default_value_t = 1)]
        pages: usize,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the detail view of one entry
    Show {
        id: u32,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or change the saved search
    Search {
        #[command(subcommand)]
        command: SearchCommands,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum SearchCommands {
    /// Print the saved search
    Show,
    /// Replace the saved search
    Set { query: String },
    /// Forget the saved search
    Clear,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show {
        #[arg(long)]
        json: bool,
    },
}

#[derive(serde::Serialize)]
struct ListOutput<'a> {
    query: &'a str,
    page: usize,
    total: usize,
    cards: &'a [CardDescriptor],
    load_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<&'a str>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli.global)?;
    let prefs = PrefsStore::open(&cli.global.data_dir);

    let Some(command) = cli.command else {
        pokedex::telemetry::init_file(&cli.global.data_dir.join("pokedex.log"))?;
        return pokedex::tui::run_with_options(pokedex::tui::TuiRunOptions {
            config,
            data_dir: cli.global.data_dir,
        });
    };

    pokedex::telemetry::init_stderr();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;

    match command {
        Commands::List { query, pages, json } => {
            runtime.block_on(list(&config, prefs, query, pages, json))?
        }
        Commands::Show { id, json } => runtime.block_on(show(&config, EntryId(id), json))?,
        Commands::Search { command } => match command {
            SearchCommands::Show => match prefs.get(SEARCH_KEY)? {
                Some(q) if !q.is_empty() => println!("{}", q),
                _ => println!("No saved search"),
            },
            SearchCommands::Set { query } => {
                prefs.set(SEARCH_KEY, &query)?;
                println!("Saved search set");
            }
            SearchCommands::Clear => {
                prefs.remove(SEARCH_KEY)?;
                println!("Saved search cleared");
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show { json } => {
                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&config).context("serialize config json")?
                    );
                } else {
                    println!("api_base: {}", config.api_base);
                    println!("list_limit: {}", config.list_limit);
                    println!("locale: {}", config.locale);
                    println!("page_size: {}", config.page_size);
                    println!("debounce_ms: {}", config.debounce_ms);
                    println!("cache_localized: {}", config.cache_localized);
                }
            }
        },
    }

    Ok(())
}

fn resolve_config(args: &GlobalArgs) -> Result<ViewerConfig> {
    let mut cfg = ViewerConfig::load_or_default(&args.data_dir.join("config.json"))?;
    if let Some(v) = &args.api_base {
        cfg.api_base = v.clone();
    }
    if let Some(v) = args.limit {
        cfg.list_limit = v;
    }
    if let Some(v) = &args.locale {
        cfg.locale = v.clone();
    }
    if let Some(v) = args.page_size {
        cfg.page_size = v;
    }
    if let Some(v) = args.debounce_ms {
        cfg.debounce_ms = v;
    }
    if args.cache_localized {
        cfg.cache_localized = true;
    }
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

async fn list(
    config: &ViewerConfig,
    prefs: PrefsStore,
    query: Option<String>,
    pages: usize,
    json: bool,
) -> Result<()> {
    let client = RemoteClient::new(config)?;
    let store = load_catalog(&client).await.context("load catalog")?;

    let mut viewer = Viewer::from_config(store, client, prefs, config);
    match query {
        Some(q) => {
            viewer.apply_query(&q).await;
        }
        None => {
            viewer.start().await;
        }
    }
    for _ in 1..pages.max(1) {
        if viewer.load_more().await.is_none() {
            break;
        }
    }
    if let Some(note) = viewer.take_note() {
        eprintln!("warning: {}", note);
    }

    let pager = viewer.pager();
    let out = ListOutput {
        query: viewer.search().query(),
        page: viewer.search().page(),
        total: pager.visible_len(),
        cards: pager.cards(),
        load_more: pager.has_load_more(),
        placeholder: pager.placeholder(),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize cards json")?
        );
        return Ok(());
    }

    if let Some(p) = out.placeholder {
        println!("{}", p);
        return Ok(());
    }
    for card in out.cards {
        println!("{: <6} {: <24} {}", card.id_label, card.title, card.types_label);
    }
    if out.load_more {
        println!(
            "-- {}/{} shown (use --pages {} for more)",
            out.cards.len(),
            out.total,
            out.page + 1
        );
    }
    Ok(())
}

async fn show(config: &ViewerConfig, id: EntryId, json: bool) -> Result<()> {
    let client = RemoteClient::new(config)?;
    let entry = client
        .fetch_entry_by_id(id)
        .await
        .with_context(|| format!("fetch entry {}", id))?;

    let mut enricher = Enricher::new(client, &config.locale);
    if config.cache_localized {
        enricher = enricher.with_cache();
    }
    let mut overlay = DetailOverlay::default();
    let view = overlay.open(&entry, &enricher).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("serialize entry json")?
        );
    } else {
        println!("{}", view.title);
        println!("{}", view.id_label);
        println!("{}", view.types_label);
        if !view.image_url.is_empty() {
            println!("image: {}", view.image_url);
        }
        println!();
        println!("{}", view.description);
    }
    Ok(())
}
