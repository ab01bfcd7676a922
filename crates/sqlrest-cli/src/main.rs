//! sqlrest CLI
//!
//! Translates SQL statements into PostgREST-style REST requests and prints
//! them as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use sqlrest_core::{split_statements, translate, ClientConfig, RestRequest};

/// Translate SQL into PostgREST-style REST requests.
#[derive(Parser)]
#[command(name = "sqlrest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the REST endpoint, e.g. https://db.example.com/rest/v1.
    #[arg(short, long, env = "SQLREST_BASE_URL")]
    base_url: Option<String>,

    /// API key sent as `apikey` and bearer token.
    #[arg(short = 'k', long, env = "SQLREST_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Database schema selected through the profile headers.
    #[arg(short, long, env = "SQLREST_SCHEMA")]
    schema: Option<String>,

    /// JSON configuration file with `base_url`, `api_key` and `schema`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full HTTP call (URL, headers, body) instead of the request
    /// description. Needs a base URL.
    #[arg(long)]
    prepare: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a single statement.
    Translate {
        /// SQL statement (read from stdin if omitted or `-`).
        sql: Option<String>,
    },

    /// Translate every statement of a `;`-separated script.
    Batch {
        /// Script file (`-` for stdin).
        input: PathBuf,

        /// Continue after a failing statement and report all failures.
        #[arg(long)]
        keep_going: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = resolve_config(&cli)?;
    if cli.prepare && config.is_none() {
        bail!("--prepare needs a base URL (--base-url, SQLREST_BASE_URL or --config)");
    }
    let output = Output {
        config: if cli.prepare { config.as_ref() } else { None },
        pretty: cli.pretty,
    };

    match &cli.command {
        Commands::Translate { sql } => {
            let sql = match sql.as_deref() {
                None | Some("-") => read_stdin()?,
                Some(sql) => sql.to_string(),
            };
            let request = translate(&sql)?;
            println!("{}", output.render(&request)?);
        }

        Commands::Batch { input, keep_going } => {
            let script = read_script(input)?;
            let statements = split_statements(&script);
            if statements.is_empty() {
                info!("No statements found.");
                return Ok(());
            }
            debug!(count = statements.len(), "split script");

            let mut failures = 0usize;
            for (index, statement) in statements.iter().enumerate() {
                let number = index + 1;
                match translate(statement) {
                    Ok(request) => println!("{}", output.render(&request)?),
                    Err(err) if *keep_going => {
                        warn!("Statement {number} failed: {err}\n  {statement}");
                        failures += 1;
                    }
                    Err(err) => {
                        return Err(err)
                            .with_context(|| format!("statement {number} failed: {statement}"));
                    }
                }
            }

            if failures > 0 {
                bail!("{failures} of {} statements failed", statements.len());
            }
        }
    }

    Ok(())
}

/// Formats translated requests, optionally resolved against a client
/// configuration.
struct Output<'a> {
    config: Option<&'a ClientConfig>,
    pretty: bool,
}

impl Output<'_> {
    fn render(&self, request: &RestRequest) -> anyhow::Result<String> {
        match self.config {
            Some(config) => to_json(&config.prepare(request), self.pretty),
            None => to_json(request, self.pretty),
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Builds the client configuration from the config file and the command
/// line. Flags override values from the file.
fn resolve_config(cli: &Cli) -> anyhow::Result<Option<ClientConfig>> {
    let from_file = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            Some(ClientConfig::from_json(&json)?)
        }
        None => None,
    };

    let mut config = match (&cli.base_url, from_file) {
        (Some(url), Some(file)) => {
            let mut config = ClientConfig::new(url.as_str())?;
            if let Some(key) = file.api_key() {
                config = config.with_api_key(key);
            }
            if let Some(schema) = file.schema() {
                config = config.with_schema(schema);
            }
            config
        }
        (Some(url), None) => ClientConfig::new(url.as_str())?,
        (None, Some(file)) => file,
        (None, None) => {
            if cli.api_key.is_some() || cli.schema.is_some() {
                debug!("ignoring API key and schema without a base URL");
            }
            return Ok(None);
        }
    };

    if let Some(key) = &cli.api_key {
        config = config.with_api_key(key.as_str());
    }
    if let Some(schema) = &cli.schema {
        config = config.with_schema(schema.as_str());
    }
    debug!(base_url = config.base_url(), "resolved client configuration");
    Ok(Some(config))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read from stdin")?;
    Ok(buf)
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_translate() {
        let cli = parse(&["sqlrest", "--pretty", "translate", "SELECT * FROM t"]);
        assert!(cli.pretty);
        match cli.command {
            Commands::Translate { sql } => assert_eq!(sql.as_deref(), Some("SELECT * FROM t")),
            Commands::Batch { .. } => panic!("expected translate"),
        }
    }

    #[test]
    fn parse_batch() {
        let cli = parse(&["sqlrest", "batch", "--keep-going", "script.sql"]);
        match cli.command {
            Commands::Batch { input, keep_going } => {
                assert_eq!(input, PathBuf::from("script.sql"));
                assert!(keep_going);
            }
            Commands::Translate { .. } => panic!("expected batch"),
        }
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_url": "http://localhost:3000", "api_key": "from-file", "schema": "public"}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = parse(&["sqlrest", "--config", path, "--schema", "learning", "translate"]);
        let config = resolve_config(&cli).unwrap().unwrap();
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.api_key(), Some("from-file"));
        assert_eq!(config.schema(), Some("learning"));

        let cli = parse(&[
            "sqlrest",
            "--config",
            path,
            "--base-url",
            "https://db.example.com/",
            "translate",
        ]);
        let config = resolve_config(&cli).unwrap().unwrap();
        assert_eq!(config.base_url(), "https://db.example.com");
        assert_eq!(config.api_key(), Some("from-file"));
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let cli = parse(&["sqlrest", "--base-url", "localhost", "translate"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn read_script_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DELETE FROM a WHERE id = 1;\nSELECT * FROM b;").unwrap();
        let script = read_script(file.path()).unwrap();
        assert_eq!(
            split_statements(&script),
            vec!["DELETE FROM a WHERE id = 1", "SELECT * FROM b"]
        );
    }

    #[test]
    fn render_plain_and_prepared() {
        let request = translate("DELETE FROM cards WHERE id = 7").unwrap();
        let output = Output {
            config: None,
            pretty: false,
        };
        assert_eq!(
            output.render(&request).unwrap(),
            r#"{"method":"DELETE","path":"/cards","query":"id=eq.7"}"#
        );

        let config = ClientConfig::new("http://localhost:3000").unwrap();
        let output = Output {
            config: Some(&config),
            pretty: false,
        };
        assert_eq!(
            output.render(&request).unwrap(),
            r#"{"method":"DELETE","url":"http://localhost:3000/cards?id=eq.7","headers":{}}"#
        );
    }
}
