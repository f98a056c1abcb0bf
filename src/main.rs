// BizDir - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. One-shot data load and enrichment
// 4. Applying the requested query and rendering the view

use bizdir::app::state::DirectoryState;
use bizdir::core::card::CardText;
use bizdir::core::export::{export_csv, export_json};
use bizdir::core::founded::current_year;
use bizdir::core::model::{BusinessEntity, SelectOption, SortOption};
use bizdir::platform;
use bizdir::platform::config::AppConfig;
use bizdir::util;
use bizdir::util::error::{DirectoryError, ExportError};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Output format for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Option list to print instead of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListKind {
    Industries,
    Locations,
    Sorts,
}

/// BizDir - business directory search, filter and sort.
///
/// Loads a JSON array of business records, marks award winners, and prints
/// the records matching the given search and filters in the chosen order.
#[derive(Parser, Debug)]
#[command(name = "bizdir", version, about)]
struct Cli {
    /// Business data file (defaults to [data] path in config, then ./data/businesses.json).
    data_file: Option<PathBuf>,

    /// Case-insensitive text matched against name, description and categories.
    #[arg(short = 's', long = "search")]
    search: Option<String>,

    /// Keep only this exact industry.
    #[arg(short = 'i', long = "industry")]
    industry: Option<String>,

    /// Keep only this exact location.
    #[arg(short = 'l', long = "location")]
    location: Option<String>,

    /// Sort mode: rank_asc, rank_desc, employees_asc, employees_desc,
    /// yearFounded_asc, yearFounded_desc, name_asc, name_desc, or none.
    #[arg(short = 'o', long = "sort", value_parser = parse_sort)]
    sort: Option<SortOption>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write output to this file instead of stdout.
    #[arg(long = "output")]
    output: Option<PathBuf>,

    /// Print an option list instead of the view.
    #[arg(long = "list", value_enum)]
    list: Option<ListKind>,

    /// Configuration file (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn parse_sort(value: &str) -> Result<SortOption, String> {
    value.parse::<SortOption>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging so [logging] level can take effect;
    // its warnings are replayed once the subscriber exists.
    let (mut config, config_warnings) = match resolve_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "BizDir starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    if let Some(ref path) = cli.data_file {
        config.data_path = path.clone();
    }

    let mut state = DirectoryState::new(&config);
    state.load();

    if let Some(message) = state.error_message() {
        eprintln!("Error: {message}");
        return ExitCode::FAILURE;
    }

    match run(&cli, &mut state) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// An explicit `--config` must load; the default location may be absent
/// or broken, in which case defaults apply with a warning.
fn resolve_config(cli: &Cli) -> util::error::Result<(AppConfig, Vec<String>)> {
    match &cli.config {
        Some(path) => Ok(platform::config::load_config_strict(path)?),
        None => {
            let path = platform::config::PlatformPaths::resolve().config_file();
            Ok(platform::config::load_config(&path))
        }
    }
}

fn run(cli: &Cli, state: &mut DirectoryState) -> Result<(), DirectoryError> {
    if let Some(search) = &cli.search {
        state.query.search_term = search.clone();
    }
    if let Some(industry) = &cli.industry {
        state.query.industry = industry.clone();
    }
    if let Some(location) = &cli.location {
        state.query.location = location.clone();
    }
    if let Some(sort) = cli.sort {
        state.query.sort = sort;
    }
    state.apply_query();

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("<stdout>"));
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(std::fs::File::create(path).map_err(|e| ExportError::Io {
            path: path.clone(),
            source: e,
        })?),
        None => Box::new(std::io::stdout().lock()),
    };

    if let Some(kind) = cli.list {
        let options = match kind {
            ListKind::Industries => state.industries.clone(),
            ListKind::Locations => state.locations.clone(),
            ListKind::Sorts => state.sort_options(),
        };
        write_options(&mut writer, &options, &out_path)?;
        return Ok(());
    }

    let view = state.view();
    let written = match cli.format {
        OutputFormat::Table => {
            write_table(&mut writer, &view, state.entities.len(), &out_path)?
        }
        OutputFormat::Csv => export_csv(&view, &mut writer, &out_path)?,
        OutputFormat::Json => {
            let n = export_json(&view, &mut writer, &out_path)?;
            writeln!(writer).map_err(|e| io_error(&out_path, e))?;
            n
        }
    };

    tracing::info!(
        shown = written,
        total = state.entities.len(),
        sort = state.query.sort.value(),
        "View rendered"
    );
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_options<W: Write>(
    writer: &mut W,
    options: &[SelectOption],
    out_path: &Path,
) -> Result<(), ExportError> {
    for opt in options {
        let line = if opt.value == opt.label {
            opt.value.clone()
        } else if opt.value.is_empty() {
            format!("(none)\t{}", opt.label)
        } else {
            format!("{}\t{}", opt.value, opt.label)
        };
        writeln!(writer, "{line}").map_err(|e| io_error(out_path, e))?;
    }
    Ok(())
}

/// Plain-text card listing, one block per business.
fn write_table<W: Write>(
    writer: &mut W,
    view: &[&BusinessEntity],
    total: usize,
    out_path: &Path,
) -> Result<usize, ExportError> {
    let year = current_year();
    let mut write = |text: String| writeln!(writer, "{text}").map_err(|e| io_error(out_path, e));

    for entity in view {
        let card = CardText::from_entity(entity, year);

        let mut heading = String::new();
        if let Some(badge) = &card.rank_badge {
            heading.push_str(&format!("[{badge}] "));
        }
        heading.push_str(&card.title);
        if card.award_winner {
            heading.push_str("  * Award Winner");
        }
        write(heading)?;
        write(format!("    {}  |  {}", card.industry, card.location))?;
        if let Some(categories) = &card.categories {
            write(format!("    {categories}"))?;
        }
        write(format!("    {}  |  {}", card.employees, card.founded))?;
        if let Some(phone) = &card.phone {
            write(format!("    Phone: {phone}"))?;
        }
        if let Some(executive) = &card.executive {
            write(format!("    Executive: {executive}"))?;
        }
        if let Some(page) = &card.page {
            write(format!("    {page}"))?;
        }
        match (&card.website, &card.website_search) {
            (Some(site), _) => write(format!("    {site}"))?,
            (None, Some(search)) => write(format!("    Website N/A (search: {search})"))?,
            (None, None) => {}
        }
        write(format!("    {}", card.description))?;
        write(String::new())?;
    }

    write(format!("{} of {total} businesses", view.len()))?;
    Ok(view.len())
}
