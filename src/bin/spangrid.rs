//! spangrid CLI - rowspan/colspan aware table header and body resolution

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use indexmap::IndexSet;
#[cfg(feature = "cli")]
use spangrid::{
    diagnostics::format_warnings, extract_rows_from_html, parse_header_rows,
    resolve_header_indices, ColumnDef, GridError, GridOptions, GridResult, GridWarning, RowRecord,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use tracing::debug;
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "spangrid")]
#[command(version)]
#[command(about = "Resolve rowspan/colspan table headers and extract table rows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored warning output
    #[arg(long, global = true)]
    no_color: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Assign logical column indices to header rows
    Header {
        /// Header rows as JSON or TOML (reads JSON from stdin if not provided)
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Exit with error if any layout warnings occur
        #[arg(long)]
        strict: bool,
    },

    /// Extract the body rows of an HTML table
    Extract {
        /// HTML file (reads from stdin if not provided)
        input: Option<String>,

        /// Column definitions (JSON or TOML); defaults to the table's <thead>
        #[arg(short, long)]
        columns: Option<String>,

        /// Which table of the document to read
        #[arg(short, long, default_value_t = 0)]
        table: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Extraction options file (TOML)
        #[arg(long)]
        config: Option<String>,

        /// Store cell text instead of inner markup
        #[arg(long)]
        text: bool,

        /// Keep surrounding whitespace in cell content
        #[arg(long)]
        no_trim: bool,

        /// Exit with error if any layout warnings occur
        #[arg(long)]
        strict: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Flat JSON records
    Json,
    /// One CSV row per record, one column per field
    Csv,
}

#[cfg(feature = "cli")]
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> GridResult<()> {
    match cli.command {
        Commands::Header {
            input,
            output,
            strict,
        } => {
            let rows = match input {
                Some(ref path) => load_columns(path)?,
                None => parse_header_rows(&read_stdin()?)?,
            };

            let resolved = resolve_header_indices(&rows);
            report_warnings(&resolved.warnings, !cli.no_color, cli.quiet);
            let header = if strict {
                resolved.into_strict()?
            } else {
                resolved.value
            };

            debug!(columns = header.total_columns, "header resolved");
            let json = serde_json::to_string_pretty(&header.rows)?;
            write_output(output.as_deref(), &json)?;
        }

        Commands::Extract {
            input,
            columns,
            table,
            format,
            output,
            config,
            text,
            no_trim,
            strict,
        } => {
            let html = match input {
                Some(ref path) => fs::read_to_string(path)?,
                None => read_stdin()?,
            };

            let mut options = match config {
                Some(ref path) => GridOptions::from_toml_str(&fs::read_to_string(path)?)?,
                None => GridOptions::default(),
            };
            if text {
                options.content = spangrid::ContentMode::Text;
            }
            if no_trim {
                options.trim_content = false;
            }
            options.strict |= strict;

            let columns: Option<Vec<ColumnDef>> = match columns {
                Some(ref path) => Some(load_columns(path)?.into_iter().flatten().collect()),
                None => None,
            };

            let result = extract_rows_from_html(&html, columns.as_deref(), table, &options);
            let resolved = match result {
                Err(GridError::Malformed { warnings }) => {
                    report_warnings(&warnings, !cli.no_color, cli.quiet);
                    return Err(GridError::Malformed { warnings });
                }
                other => other?,
            };
            report_warnings(&resolved.warnings, !cli.no_color, cli.quiet);

            debug!(rows = resolved.value.len(), "table extracted");
            let rendered = match format {
                OutputFormat::Json => {
                    let records: Vec<_> = resolved.value.iter().map(RowRecord::to_json).collect();
                    serde_json::to_string_pretty(&records)?
                }
                OutputFormat::Csv => records_to_csv(&resolved.value)?,
            };
            write_output(output.as_deref(), &rendered)?;
        }

        Commands::Info => {
            println!("spangrid - rowspan/colspan aware table resolution");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Commands:");
            println!("  header   Assign fieldIndex to multi-row header definitions");
            println!("  extract  Map HTML table body cells onto logical columns");
            println!();
            println!("Inputs:");
            println!("  Column definitions: .json (array of rows) or .toml ([[row]] tables)");
            println!("  Extraction options: TOML (trim_content, content, strict)");
            println!();
            println!("Set RUST_LOG=debug for resolution traces.");
        }
    }

    Ok(())
}

/// Column definitions file, by extension
///
/// TOML files hold an array of `[[row]]` tables, each with a `columns` array.
#[cfg(feature = "cli")]
fn load_columns(path: &str) -> GridResult<Vec<Vec<ColumnDef>>> {
    let content = fs::read_to_string(path)?;
    let is_toml = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        #[derive(serde::Deserialize)]
        struct HeaderFile {
            #[serde(default)]
            row: Vec<HeaderRow>,
        }
        #[derive(serde::Deserialize)]
        struct HeaderRow {
            #[serde(default)]
            columns: Vec<ColumnDef>,
        }

        let file: HeaderFile = toml::from_str(&content)?;
        Ok(file.row.into_iter().map(|row| row.columns).collect())
    } else {
        parse_header_rows(&content)
    }
}

#[cfg(feature = "cli")]
fn read_stdin() -> GridResult<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> GridResult<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", content)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn report_warnings(warnings: &[GridWarning], use_color: bool, quiet: bool) {
    if quiet || warnings.is_empty() {
        return;
    }
    eprintln!("{}", format_warnings(warnings, use_color));
}

/// Records as CSV, one column per field in first-seen order
#[cfg(feature = "cli")]
fn records_to_csv(records: &[RowRecord]) -> GridResult<String> {
    let fields: IndexSet<&str> = records.iter().flat_map(|r| r.fields()).collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&fields).map_err(csv_error)?;
    for record in records {
        let row = fields.iter().map(|field| record.get(field).unwrap_or(""));
        writer.write_record(row).map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GridError::invalid(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| GridError::invalid(e.to_string()))
}

#[cfg(feature = "cli")]
fn csv_error(err: csv::Error) -> GridError {
    GridError::IoError {
        message: err.to_string(),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install spangrid --features cli");
    eprintln!("  spangrid <header|extract|info> [OPTIONS]");
}
