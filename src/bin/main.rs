//! oracle-macros CLI - Expand time macros in SQL templates
//!
//! Usage:
//!   oracle-macros expand [--from <bound>] [--to <bound>] [--file <path> | <sql>]
//!   oracle-macros connection [--config <path>] <datasource>
//!
//! Examples:
//!   oracle-macros expand --from now-6h "SELECT \$__time(ts) FROM t WHERE \$__timeFilter(ts)"
//!   oracle-macros expand --file query.sql --format json
//!   oracle-macros connection production

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use oracle_macros::config::{EndpointConfig, Settings};
use oracle_macros::tsdb::{Query, TimeRange};
use oracle_macros::MacroEngine;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oracle-macros")]
#[command(about = "Expand Grafana-style time macros into Oracle SQL")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand the macros in a SQL template
    Expand {
        /// SQL template (reads stdin if neither this nor --file is given)
        sql: Option<String>,

        /// Read the template from a file
        #[arg(short, long, conflicts_with = "sql")]
        file: Option<PathBuf>,

        /// Range start: epoch ms, `now` or `now-<interval>`
        #[arg(long, default_value = "now-6h")]
        from: String,

        /// Range end: epoch ms, `now` or `now-<interval>`
        #[arg(long, default_value = "now")]
        to: String,

        /// Output format
        #[arg(long, default_value = "sql")]
        format: OutputFormat,
    },

    /// Show the endpoint configuration of a datasource
    Connection {
        /// Datasource name
        datasource: String,

        /// Config file (defaults to the standard search path)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Output SQL only
    Sql,
    /// Output SQL plus the query model as JSON
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Expand {
            sql,
            file,
            from,
            to,
            format,
        } => cmd_expand(sql, file, &from, &to, format),
        Commands::Connection { datasource, config } => cmd_connection(&datasource, config),
    }
}

fn read_template(sql: Option<String>, file: Option<PathBuf>) -> Result<String, String> {
    if let Some(sql) = sql {
        return Ok(sql);
    }
    if let Some(file) = file {
        return fs::read_to_string(&file)
            .map_err(|e| format!("Error reading file '{}': {}", file.display(), e));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("Error reading stdin: {}", e))?;
    Ok(buf)
}

fn cmd_expand(
    sql: Option<String>,
    file: Option<PathBuf>,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> ExitCode {
    let template = match read_template(sql, file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let time_range = match TimeRange::parse(from, to, Utc::now()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid time range: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut query = Query::new("A");
    let expanded = match MacroEngine::oracle().interpolate(&mut query, &time_range, &template) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Macro error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match format {
        OutputFormat::Sql => println!("{}", expanded),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "sql": expanded,
                "from": time_range.from_utc(),
                "to": time_range.to_utc(),
                "model": query.model,
            });
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing output: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn cmd_connection(name: &str, config: Option<PathBuf>) -> ExitCode {
    let settings = match config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };

    let datasource = match settings.and_then(|s| s.get_datasource(name)) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let endpoint = EndpointConfig::from_datasource(&datasource);
    match serde_json::to_string_pretty(&endpoint) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing endpoint: {}", e);
            ExitCode::FAILURE
        }
    }
}
