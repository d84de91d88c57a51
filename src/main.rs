use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use easytable::render::render_to_string;
use easytable::{SortDirection, TableController, TableOptions};

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(name = "easytable", about = "Load records into a table and print a searched, sorted, paged view")]
struct Cli {
    /// JSON file with table options (columns, enableSearch, paginate, ...)
    #[arg(long, conflicts_with = "columns")]
    options: Option<PathBuf>,

    /// Column headers, comma-separated
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,

    /// CSV records to load (no header line)
    #[arg(long, conflicts_with = "json")]
    csv: Option<PathBuf>,

    /// JSON array of objects keyed by column header
    #[arg(long)]
    json: Option<PathBuf>,

    /// Show only rows with a cell containing this text
    #[arg(long)]
    search: Option<String>,

    /// Sort by column, as <column>:<asc|desc>; column is a header or a position
    #[arg(long)]
    sort: Option<String>,

    /// Rows per page; enables pagination
    #[arg(long)]
    per_page: Option<usize>,

    /// Page to show (1-indexed)
    #[arg(long)]
    page: Option<usize>,

    /// Built-in theme (1-3)
    #[arg(long)]
    style: Option<u8>,

    /// Print the loaded records instead of the rendered table
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut table = build_table(&cli)?;

    if let Some(path) = &cli.csv {
        let text = read(path)?;
        let added = table
            .load_csv(&text)
            .with_context(|| format!("loading {}", path.display()))?;
        tracing::info!(added, "Loaded CSV records");
    }
    if let Some(path) = &cli.json {
        let text = read(path)?;
        let added = table
            .load_json(&text)
            .with_context(|| format!("loading {}", path.display()))?;
        tracing::info!(added, "Loaded JSON records");
    }

    match cli.export {
        Some(ExportFormat::Csv) => println!("{}", table.to_csv()),
        Some(ExportFormat::Json) => println!("{}", table.to_json()),
        None => {
            apply_view(&mut table, &cli)?;
            println!("{}", render_to_string(&table.frame()));
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn build_table(cli: &Cli) -> Result<TableController> {
    let mut options = match &cli.options {
        Some(path) => TableOptions::from_file(path)
            .with_context(|| format!("reading options from {}", path.display()))?,
        None if !cli.columns.is_empty() => TableOptions::new(cli.columns.iter().cloned())
            .with_search()
            .with_sort(),
        None => bail!("either --options or --columns is required"),
    };
    if let Some(per_page) = cli.per_page {
        options = options.with_pagination(per_page);
    }
    if let Some(style) = cli.style {
        options = options.with_style(style);
    }

    Ok(TableController::new("easytable", options)?)
}

fn apply_view(table: &mut TableController, cli: &Cli) -> Result<()> {
    if let Some(query) = &cli.search {
        if !table.search(query) {
            eprintln!("No rows match '{query}'");
        }
    }
    if let Some(spec) = &cli.sort {
        let (column, direction) = parse_sort(table, spec)?;
        table.sort(column, direction)?;
    }
    if let Some(page) = cli.page {
        table.go_to_page(page);
    }
    Ok(())
}

/// `<column>:<direction>`, direction defaulting to ascending
fn parse_sort(table: &TableController, spec: &str) -> Result<(usize, SortDirection)> {
    let (column, direction) = match spec.rsplit_once(':') {
        Some((column, direction)) => (column, direction.parse::<SortDirection>()?),
        None => (spec, SortDirection::Ascending),
    };

    let position = table
        .columns()
        .iter()
        .position(|c| c.name == column)
        .or_else(|| column.parse::<usize>().ok());
    match position {
        Some(position) => Ok((position, direction)),
        None => bail!("unknown sort column '{column}'"),
    }
}
