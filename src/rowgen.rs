use anyhow::{Context, Result};
use log::{info, warn};
use rtable::{generate_rows, RecordSchema, DEMO_SCHEMA};
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

struct Config {
    count: usize,
    seed: u64,
    schema_file: Option<String>,
    output_file: Option<String>,
    pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: 100,
            seed: 42,
            schema_file: None,
            output_file: None,
            pretty: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-count" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-count requires an argument");
                }
                config.count = args[i].parse().context("-count expects a number")?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse().context("-seed expects a number")?;
            }
            "-schema" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-schema requires a file path argument");
                }
                config.schema_file = Some(args[i].clone());
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-pretty" => {
                config.pretty = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                warn!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Sample Row Generator");
    println!("Usage: rtable-rowgen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -count <N>             Number of rows (default: 100)");
    println!("  -seed <N>              Random seed (default: 42)");
    println!("  -schema <FILE>         JSON record schema (default: built-in demo schema)");
    println!("  -out <FILE>            Output file path (default: stdout)");
    println!("  -pretty                Pretty-print the JSON output");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = parse_args()?;

    let schema = match &config.schema_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read schema {}", path))?;
            RecordSchema::from_json_str(&json)?
        }
        None => DEMO_SCHEMA.clone(),
    };

    let rows = generate_rows(config.count, &schema, config.seed);

    let mut out: Box<dyn Write> = match &config.output_file {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if config.pretty {
        serde_json::to_writer_pretty(&mut out, &rows)?;
    } else {
        serde_json::to_writer(&mut out, &rows)?;
    }
    writeln!(out)?;
    out.flush()?;

    if let Some(path) = &config.output_file {
        info!("{} rows written to: {}", rows.len(), path);
    }

    Ok(())
}
