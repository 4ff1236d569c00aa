//! typedex: terminal dashboard over the PokeAPI creature and type catalogs.
//!
//! Fetches the catalogs once per run, derives statistics with
//! `typedex-analytics` and prints them as text tables or JSON.

mod render;

use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use typedex_analytics::query::{
    CatalogQuery, DEFAULT_PAGE_SIZE, SortColumn, immunities, resistances,
    super_effective_targets, weaknesses,
};
use typedex_analytics::{
    DerivedStatistics, build_effectiveness_matrix, compute_type_combinations,
    compute_type_distribution, compute_type_rankings,
};
use typedex_client::{
    CatalogClient, ClientConfig, DEFAULT_CREATURE_COUNT, DEFAULT_TYPE_COUNT, FetchError,
    POKEAPI_URL,
};

const LOAD_ERROR: &str = "Error loading Pokemon data. Please try again later.";

#[derive(Parser, Debug)]
#[command(author, version, about = "Type analytics for the PokeAPI creature catalog")]
struct Args {
    /// PokeAPI base URL
    #[arg(long, env = "TYPEDEX_BASE_URL", default_value = POKEAPI_URL)]
    base_url: String,
    /// Creature ids 1..=N to fetch
    #[arg(long, default_value_t = DEFAULT_CREATURE_COUNT)]
    creatures: u32,
    /// Type ids 1..=N to fetch
    #[arg(long, default_value_t = DEFAULT_TYPE_COUNT)]
    types: u32,
    /// Maximum concurrent requests per batch
    #[arg(long, default_value_t = 32)]
    max_in_flight: usize,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
    /// Print JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,
    /// Log fetch progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Creatures per type, most common first
    Distribution {
        /// Only show the first N types
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Most common multi-type combinations
    Combinations,
    /// Attacker × defender effectiveness grid
    Matrix,
    /// Best offensive and most vulnerable types
    Rankings {
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// Catalog totals (with --json, every derived statistic)
    Summary,
    /// Searchable, sortable catalog table
    List {
        /// Filter by id, name or type (case-insensitive)
        #[arg(long, default_value = "")]
        search: String,
        /// Sort column: id, name, height, weight, exp
        #[arg(long, default_value = "id", value_parser = parse_sort)]
        sort: SortColumn,
        #[arg(long)]
        desc: bool,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Weaknesses, resistances and immunities of a defending type (or pair)
    Matchup {
        #[arg(required = true, num_args = 1..=2)]
        defenders: Vec<String>,
    },
}

fn parse_sort(s: &str) -> Result<SortColumn, String> {
    SortColumn::from_name(s).ok_or_else(|| format!("unknown sort column: {s}"))
}

/// Initialize logging to stderr. RUST_LOG overrides the default level.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ClientConfig::new()
        .with_base_url(args.base_url.clone())
        .with_creature_count(args.creatures)
        .with_type_count(args.types)
        .with_max_in_flight(args.max_in_flight)
        .with_request_timeout(Duration::from_secs(args.timeout));
    let mut client = CatalogClient::with_config(config)?;

    if !args.json {
        eprintln!("Loading Pokemon data...");
    }

    match run(&mut client, &args).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) if e.is::<FetchError>() => {
            tracing::error!(error = %e, "Failed to load catalog");
            eprintln!("{LOAD_ERROR}");
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

/// Fetch what the command needs and render it
async fn run(client: &mut CatalogClient, args: &Args) -> Result<String> {
    let json = args.json;

    let output = match &args.command {
        Command::Distribution { limit } => {
            let creatures = client.creatures().await?;
            let mut shares = compute_type_distribution(&creatures);
            if json {
                shares.truncate(limit.unwrap_or(usize::MAX));
                serde_json::to_string_pretty(&shares)?
            } else {
                render::distribution(&shares, *limit)
            }
        }
        Command::Combinations => {
            let creatures = client.creatures().await?;
            let combos = compute_type_combinations(&creatures);
            if json {
                serde_json::to_string_pretty(&combos)?
            } else {
                render::combinations(&combos)
            }
        }
        Command::Matrix => {
            let types = client.types().await?;
            let matrix = build_effectiveness_matrix(&types);
            if json {
                serde_json::to_string_pretty(&matrix)?
            } else {
                render::matrix(&matrix)
            }
        }
        Command::Rankings { top } => {
            let types = client.types().await?;
            let rankings = compute_type_rankings(&types);
            if json {
                let offense: Vec<_> = rankings.by_offense().into_iter().take(*top).collect();
                let vulnerable: Vec<_> =
                    rankings.by_vulnerability().into_iter().take(*top).collect();
                serde_json::to_string_pretty(&json!({
                    "best_offensive": offense,
                    "most_vulnerable": vulnerable,
                }))?
            } else {
                render::rankings(&rankings, *top)
            }
        }
        Command::Summary => {
            let snapshot = client.snapshot().await?;
            let stats = DerivedStatistics::compute(&snapshot.creatures, &snapshot.types);
            if json {
                serde_json::to_string_pretty(&stats)?
            } else {
                render::summary(&stats.summary)
            }
        }
        Command::List {
            search,
            sort,
            desc,
            page,
            page_size,
        } => {
            let creatures = client.creatures().await?;
            let query = CatalogQuery::new()
                .with_search(search.as_str())
                .with_sort(*sort, *desc)
                .with_page(page.saturating_sub(1), *page_size);
            let page = query.apply(&creatures);
            if json {
                serde_json::to_string_pretty(&json!({
                    "rows": page.rows,
                    "total_matches": page.total_matches,
                    "page": page.page + 1,
                    "page_count": page.page_count,
                }))?
            } else {
                render::catalog_page(&page)
            }
        }
        Command::Matchup { defenders } => {
            let types = client.types().await?;
            let matrix = build_effectiveness_matrix(&types);
            let defenders: Vec<String> = defenders.iter().map(|d| d.to_lowercase()).collect();
            let defenders: Vec<&str> = defenders.iter().map(String::as_str).collect();

            for name in &defenders {
                if matrix.get(name, name).is_none() {
                    bail!("Unknown type: {name}");
                }
            }

            let weak = weaknesses(&matrix, &defenders);
            let resist = resistances(&matrix, &defenders);
            let immune = immunities(&matrix, &defenders);

            // what the defending types hit for 2× when they attack
            let targets: Vec<Vec<String>> = defenders
                .iter()
                .map(|d| super_effective_targets(&matrix, d))
                .collect();
            let strong: Vec<String> = matrix
                .type_names()
                .iter()
                .filter(|name| targets.iter().any(|list| list.contains(*name)))
                .cloned()
                .collect();

            if json {
                serde_json::to_string_pretty(&json!({
                    "defending": defenders,
                    "weaknesses": weak,
                    "resistances": resist,
                    "immunities": immune,
                    "super_effective_against": strong,
                }))?
            } else {
                render::matchup(&defenders, &weak, &resist, &immune, &strong)
            }
        }
    };

    Ok(output)
}
