//! Command-line entry point.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use dbexport::generate;
use dbexport::{analyze_table, Config, Dialect, Snapshot, TableDescriptor};

#[derive(Parser)]
#[command(name = "dbexport")]
#[command(about = "Generate DDL, schema and JSON artifacts from a reflection snapshot")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    verbosity: String,

    /// Log output format (text or json)
    #[arg(long, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all configured artifacts from a snapshot
    Generate {
        /// Path to the reflection snapshot
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Override the configured output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Analyze a snapshot and report columns with no classification
    Check {
        /// Path to the reflection snapshot
        #[arg(short, long)]
        snapshot: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli.verbosity, &cli.log_format);

    let result = match &cli.command {
        Commands::Generate { snapshot, out_dir } => {
            run_generate(&cli.config, snapshot, out_dir.as_deref())
        }
        Commands::Check { snapshot } => run_check(&cli.config, snapshot),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn setup_logging(verbosity: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity));

    if format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load config and snapshot, analyze every non-excluded table.
fn load_and_analyze(
    config_path: &Path,
    snapshot_path: &Path,
) -> dbexport::Result<(Config, Dialect, Snapshot, Vec<TableDescriptor>)> {
    let config = Config::load(config_path)?;
    let dialect = config.dialect()?;
    let snapshot = Snapshot::load(snapshot_path)?;

    let tables: Vec<_> = snapshot
        .tables
        .iter()
        .filter(|t| !config.exclude_tables.contains(&t.name))
        .map(|t| analyze_table(t, dialect))
        .collect();
    info!(
        "analyzed {} tables ({} dialect, {} excluded)",
        tables.len(),
        dialect,
        snapshot.tables.len() - tables.len()
    );
    Ok((config, dialect, snapshot, tables))
}

fn run_generate(
    config_path: &Path,
    snapshot_path: &Path,
    out_dir: Option<&Path>,
) -> dbexport::Result<()> {
    let (config, _, snapshot, tables) = load_and_analyze(config_path, snapshot_path)?;

    let dir = out_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.outputs.dir));
    fs::create_dir_all(&dir)?;

    let mysql = generate::mysql_ddl(&tables)?;
    write_artifact(&dir.join(&config.outputs.mysql_sql), &mysql)?;

    let sqlite = generate::sqlite_ddl(&tables, config.decimal_as_real)?;
    write_artifact(&dir.join(&config.outputs.sqlite_sql), &sqlite)?;

    let schemas = generate::schema_defs(&tables)?;
    write_artifact(&dir.join(&config.outputs.schemas), &schemas)?;

    if !snapshot.data.is_empty() {
        let mut entries = Vec::new();
        for table in &tables {
            let rows = match snapshot.data.get(&table.name) {
                Some(rows) => generate::normalize_rows(table, rows)?,
                None => continue,
            };
            entries.push((table.name.clone(), rows));
        }
        let doc = generate::dump_json(entries);
        write_artifact(
            &dir.join(&config.outputs.json),
            &serde_json::to_string_pretty(&doc)?,
        )?;
    }

    Ok(())
}

fn write_artifact(path: &Path, content: &str) -> dbexport::Result<()> {
    fs::write(path, content)?;
    info!("wrote {}", path.display());
    Ok(())
}

fn run_check(config_path: &Path, snapshot_path: &Path) -> dbexport::Result<()> {
    let (_, dialect, _, tables) = load_and_analyze(config_path, snapshot_path)?;

    let mut unknown = 0usize;
    for table in &tables {
        for column in &table.columns {
            if column.ty.is_unknown() {
                unknown += 1;
                warn!(
                    "{}.{} has unclassifiable {} type '{}'",
                    table.name,
                    column.name,
                    dialect,
                    column.ty.raw().native_form()
                );
                println!(
                    "UNKNOWN {}.{} ({})",
                    table.name,
                    column.name,
                    column.ty.raw().native_form()
                );
            }
        }
    }

    if unknown == 0 {
        println!("all columns classified");
    } else {
        println!("{} unclassifiable columns", unknown);
    }
    Ok(())
}
