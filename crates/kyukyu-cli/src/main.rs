mod display;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use kyukyu_core::{FacilityConfig, RawGrid, YearMonth, records_to_batch};

/// Normalise an extracted emergency-duty grid into a dated schedule.
#[derive(Debug, Parser)]
#[command(name = "kyukyu", version)]
struct Cli {
    /// JSON file holding the extracted grid (array of rows, cells string or null).
    #[arg(long, env = "KYUKYU_GRID")]
    grid: PathBuf,

    /// Month the grid was published for (YYYY-MM, YYYY/MM or YYYYMM).
    #[arg(long, env = "KYUKYU_MONTH")]
    month: Option<String>,

    /// Publication URL; its last path segment names the month when --month is absent.
    #[arg(long, env = "KYUKYU_SOURCE_URL")]
    source_url: Option<String>,

    /// JSON file overriding the built-in facility lists.
    #[arg(long, env = "KYUKYU_FACILITIES")]
    facilities: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Days,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("kyukyu v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let month = resolve_month(cli.month.as_deref(), cli.source_url.as_deref())?;
    let grid = load_grid(&cli.grid)?;
    let facilities = match &cli.facilities {
        Some(path) => load_facilities(path)?,
        None => FacilityConfig::default(),
    };

    let records = kyukyu_core::run_with(&grid, month, &facilities)
        .with_context(|| format!("normalising {}", cli.grid.display()))?;

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        Format::Table => print!("{}", display::format_table(&records_to_batch(&records)?)?),
        Format::Days => print!("{}", display::format_days(&records_to_batch(&records)?)?),
    }
    Ok(())
}

fn resolve_month(month: Option<&str>, source_url: Option<&str>) -> anyhow::Result<YearMonth> {
    match (month, source_url) {
        (Some(m), _) => m.parse().with_context(|| format!("parsing --month {m:?}")),
        (None, Some(url)) => {
            YearMonth::from_url_path(url).with_context(|| format!("deriving month from {url}"))
        }
        (None, None) => bail!("either --month or --source-url is required"),
    }
}

fn load_grid(path: &Path) -> anyhow::Result<RawGrid> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing grid JSON {}", path.display()))
}

fn load_facilities(path: &Path) -> anyhow::Result<FacilityConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    FacilityConfig::from_json(&text).with_context(|| format!("loading {}", path.display()))
}
