use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cultivar_catalog::{Catalog, PageCursor, DEFAULT_PAGE_SIZE};
use cultivar_filter::{FilterSpec, MatchType, RangeFilter, YearRange};
use cultivar_slug::to_slug;
use cultivar_store::Record;
use cultivar_taxonomy::{grouped, related_categories};

#[derive(Parser)]
#[command(name = "cultivar")]
#[command(about = "Browse a cultivar catalog from the command line", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the line-delimited JSON record source
    #[arg(long, global = true, default_value = "varieties.jsonl")]
    data: PathBuf,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log only warnings and errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the derived tag universe
    Tags {
        /// Organize tags into display groups
        #[arg(long)]
        grouped: bool,
    },
    /// Look up one record by its URL slug
    Show { slug: String },
    /// List records matching a category tag
    Category { tag: String },
    /// Filter the catalog and page through the result
    Filter(FilterArgs),
    /// Pick up to four related records for a focal record
    Related {
        slug: String,
        /// Seed the selection for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Name search text
    #[arg(long)]
    search: Option<String>,

    /// Exact name match instead of substring
    #[arg(long)]
    exact: bool,

    /// Hybridizer search text
    #[arg(long)]
    hybridizer: Option<String>,

    /// Exact hybridizer match instead of substring
    #[arg(long)]
    hybridizer_exact: bool,

    #[arg(long)]
    year_start: Option<i32>,
    #[arg(long)]
    year_end: Option<i32>,

    /// Exact ploidy value
    #[arg(long)]
    ploidy: Option<String>,

    #[arg(long)]
    bloom_size_min: Option<f64>,
    #[arg(long)]
    bloom_size_max: Option<f64>,
    #[arg(long)]
    scape_height_min: Option<f64>,
    #[arg(long)]
    scape_height_max: Option<f64>,
    #[arg(long)]
    branches_min: Option<f64>,
    #[arg(long)]
    branches_max: Option<f64>,
    #[arg(long)]
    bud_count_min: Option<f64>,
    #[arg(long)]
    bud_count_max: Option<f64>,

    /// Raw bloom-season value; repeat for multi-select
    #[arg(long = "season")]
    seasons: Vec<String>,

    /// Only records that mention reblooming
    #[arg(long)]
    rebloom: bool,

    /// Exact foliage type value
    #[arg(long)]
    foliage: Option<String>,

    /// Items revealed per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Number of pages to reveal
    #[arg(long, default_value_t = 1)]
    pages: usize,
}

impl FilterArgs {
    fn to_spec(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            match_type: match_type(self.exact),
            hybridizer: self.hybridizer.clone(),
            hybridizer_match_type: match_type(self.hybridizer_exact),
            year_range: YearRange {
                start: self.year_start,
                end: self.year_end,
            },
            ploidy: self.ploidy.clone(),
            bloom_size: RangeFilter {
                min: self.bloom_size_min,
                max: self.bloom_size_max,
            },
            scape_height: RangeFilter {
                min: self.scape_height_min,
                max: self.scape_height_max,
            },
            branches: RangeFilter {
                min: self.branches_min,
                max: self.branches_max,
            },
            bud_count: RangeFilter {
                min: self.bud_count_min,
                max: self.bud_count_max,
            },
            bloom_season: self.seasons.clone(),
            rebloom: self.rebloom,
            foliage_type: self.foliage.clone(),
        }
    }
}

fn match_type(exact: bool) -> MatchType {
    if exact {
        MatchType::Exact
    } else {
        MatchType::Substring
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let catalog = Catalog::open(&cli.data);
    log::debug!(
        "catalog opened from {} with {} records",
        cli.data.display(),
        catalog.len()
    );

    match &cli.command {
        Commands::Tags { grouped } => run_tags(&catalog, *grouped, cli.json),
        Commands::Show { slug } => run_show(&catalog, slug, cli.json),
        Commands::Category { tag } => run_category(&catalog, tag, cli.json),
        Commands::Filter(args) => run_filter(&catalog, args, cli.json),
        Commands::Related { slug, seed } => run_related(&catalog, slug, *seed, cli.json),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run_tags(catalog: &Catalog, group: bool, json: bool) -> Result<()> {
    let tags = catalog.all_tags();

    if json {
        println!("{}", serde_json::to_string_pretty(tags)?);
        return Ok(());
    }

    if group {
        for (section, members) in grouped(tags) {
            println!("{section}:");
            for tag in members {
                println!("  {tag}");
            }
        }
    } else {
        for tag in tags {
            println!("{tag}");
        }
    }
    Ok(())
}

fn run_show(catalog: &Catalog, slug: &str, json: bool) -> Result<()> {
    let Some(record) = catalog.find_by_slug(slug) else {
        bail!("no record found for slug {slug:?}");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("{}", record.name);
    println!("  {} ({})", record.hybridizer, record.year);
    print_optional("Ploidy", &record.ploidy);
    print_optional("Bloom size", &record.bloom_size);
    print_optional("Scape height", &record.scape_height);
    print_optional("Branches", &record.branches);
    print_optional("Bud count", &record.bud_count);
    print_optional("Bloom season", &record.bloom_season);
    print_optional("Bloom habit", &record.bloom_habit);
    print_optional("Foliage", &record.foliage_type);
    print_optional("Form", &record.form);
    print_optional("Sculpting", &record.sculpting);
    print_optional("Fragrance", &record.fragrance);
    print_optional("Color", &record.color_description);
    print_optional("Parentage", &record.parentage);
    print_optional("Seedling #", &record.seedling_id);
    print_optional("Notes", &record.notes);
    print_optional("Price", &record.price);
    print_optional("Availability", &record.availability);
    print_optional("Learn more", &record.learn_more_url);

    let tags: Vec<String> = catalog.tags_for(record).into_iter().collect();
    if !tags.is_empty() {
        println!("  Tags: {}", tags.join(", "));
    }
    Ok(())
}

fn print_optional(label: &str, field: &Option<String>) {
    if let Some(value) = cultivar_store::non_empty(field) {
        println!("  {label}: {value}");
    }
}

fn run_category(catalog: &Catalog, tag: &str, json: bool) -> Result<()> {
    let records = catalog.records_with_tag(tag);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("{} varieties in {tag:?}", records.len());
    for record in &records {
        println!("{}", summary_line(record));
    }

    let related = related_categories(tag);
    if !related.is_empty() {
        println!("Related: {}", related.join(", "));
    }
    Ok(())
}

fn run_filter(catalog: &Catalog, args: &FilterArgs, json: bool) -> Result<()> {
    let spec = args.to_spec();
    let filtered = catalog.filter(&spec);

    let mut cursor = PageCursor::new(args.page_size);
    cursor.reset(filtered.len());
    for _ in 1..args.pages {
        if !cursor.advance() {
            break;
        }
    }
    let visible = cursor.slice(&filtered);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    for record in visible {
        println!("{}", summary_line(record));
    }
    println!("{} of {} shown", visible.len(), filtered.len());
    Ok(())
}

fn run_related(catalog: &Catalog, slug: &str, seed: Option<u64>, json: bool) -> Result<()> {
    let Some(focal) = catalog.find_by_slug(slug) else {
        bail!("no record found for slug {slug:?}");
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let related = catalog.related(focal, &mut rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&related)?);
        return Ok(());
    }

    for record in &related {
        println!("{} ({})", summary_line(record), to_slug(&record.name));
    }
    Ok(())
}

fn summary_line(record: &Record) -> String {
    format!("{} | {} ({})", record.name, record.hybridizer, record.year)
}
