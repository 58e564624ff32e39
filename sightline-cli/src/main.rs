use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use sightline::angle::parse_signed;
use sightline::{BodyPosition, CorrectErrorPolicy, DispatchConfig, Dispatcher, TableAlmanac};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Sightline CLI (celestial sight reduction)")]
struct Cli {
    /// Path to the JSON configuration file. Defaults apply when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Sighting (JSON object) or batch (JSON array); `-` reads stdin.
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    input: PathBuf,
    /// Write results here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
struct AlmanacEntry {
    body: String,
    date: String,
    time: String,
    lat: String,
    long: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    correct_errors: CorrectErrorPolicy,
    parallel: bool,
    almanac: Vec<AlmanacEntry>,
}

impl Config {
    fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn dispatcher(&self) -> Result<Dispatcher, Box<dyn std::error::Error>> {
        let mut almanac = TableAlmanac::new();
        for entry in &self.almanac {
            let position = BodyPosition {
                lat: parse_signed(&entry.lat)
                    .map_err(|err| format!("almanac entry {}: lat: {err}", entry.body))?,
                long: parse_signed(&entry.long)
                    .map_err(|err| format!("almanac entry {}: long: {err}", entry.body))?,
            };
            almanac.insert(&entry.body, &entry.date, &entry.time, position);
        }

        let dispatcher = Dispatcher::new().with_config(DispatchConfig {
            correct_errors: self.correct_errors,
            parallel: self.parallel,
        });
        Ok(if almanac.is_empty() {
            dispatcher
        } else {
            dispatcher.with_almanac(Arc::new(almanac))
        })
    }
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("sightline=debug".parse()?),
            )
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let dispatcher = config.dispatcher()?;
    tracing::debug!(operations = ?dispatcher.operations().collect::<Vec<_>>(), "dispatcher ready");

    let input: Value = serde_json::from_str(&read_input(&cli.input)?)?;
    let output = match input {
        Value::Array(batch) => Value::Array(
            dispatcher
                .dispatch_all(batch)
                .into_iter()
                .map(Value::from)
                .collect(),
        ),
        single => Value::from(dispatcher.dispatch(Some(single))),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match cli.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
