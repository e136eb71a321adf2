use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use dotpath::config::Config;
use dotpath::file::loader::{load_file, load_from_stdin};
use dotpath::output::{render, OutputFormat};
use dotpath::value::Value;
use dotpath::Resolver;

/// dotpath - Resolve a path expression against YAML or JSON data
#[derive(Parser)]
#[command(name = "dotpath")]
#[command(version)]
#[command(
    about = "Resolve a dotted/bracketed path such as `items[0].name` against YAML or JSON data",
    long_about = None
)]
struct Cli {
    /// Path expression, e.g. `spec.containers[0].image`
    path: String,

    /// Data file (.yaml, .yml, .json, .jsonl, optionally .gz); omit to read stdin
    file: Option<String>,

    /// Output format (default from config, else yaml)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Exit with status 1 when the path resolves to nothing
    #[arg(long)]
    fail_on_absent: bool,

    /// Indirection layers followed per level
    #[arg(long)]
    max_indirection: Option<usize>,
}

/// Effective options once CLI flags are applied over the config file.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    format: OutputFormat,
    pretty: bool,
    fail_on_absent: bool,
    max_indirection: usize,
}

impl Settings {
    fn merge(cli: &Cli, config: &Config) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output_format),
            pretty: config.pretty && !cli.compact,
            fail_on_absent: cli.fail_on_absent || config.fail_on_absent,
            max_indirection: cli.max_indirection.unwrap_or(config.max_indirection),
        }
    }

    /// Exit status for a resolution that found nothing.
    fn absent_status(&self) -> u8 {
        if self.fail_on_absent {
            1
        } else {
            0
        }
    }
}

fn init_logging(config: &Config) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn load_input(cli: &Cli) -> Result<Value> {
    match &cli.file {
        Some(file_path) => {
            load_file(file_path).with_context(|| format!("Failed to load {}", file_path))
        }
        None => {
            if io::stdin().is_terminal() {
                anyhow::bail!("No input: pass a data file or pipe data on stdin");
            }
            load_from_stdin()
        }
    }
}

/// Resolves the path against `data`, writes the result to `out` and returns
/// the exit status.
fn run(cli: &Cli, settings: &Settings, data: &Value, out: &mut impl Write) -> Result<u8> {
    let resolver = Resolver::new().with_max_indirection(settings.max_indirection);

    let found = resolver.resolve(&cli.path, data)?;
    if found.is_none() {
        log::info!("nothing found at \"{}\"", cli.path);
        return Ok(settings.absent_status());
    }

    let text = render(found, settings.format, settings.pretty)?;
    writeln!(out, "{}", text).context("Failed to write output")?;

    Ok(0)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // logging is configured from the config file, so report its errors after
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&config);
    if let Some(err) = config_error {
        log::warn!("using default configuration: {:#}", err);
    }

    let settings = Settings::merge(&cli, &config);
    let data = load_input(&cli)?;
    let status = run(&cli, &settings, &data, &mut io::stdout().lock())?;

    Ok(ExitCode::from(status))
}
