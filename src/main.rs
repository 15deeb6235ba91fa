use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use instructfmt::Config;

const DEFAULT_CONFIG_FILE: &str = "instructfmt.toml";

#[derive(Parser)]
#[command(name = "instructfmt")]
#[command(about = "Format assistant instruction text as HTML, JSON or plain text")]
struct Cli {
    /// Input file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Render config (defaults to ./instructfmt.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log section classification to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
    Text,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

fn run(cli: &Cli) -> instructfmt::Result<()> {
    let instructions = match cli.input.as_deref() {
        None => io::read_to_string(io::stdin())?,
        Some(path) if path == Path::new("-") => io::read_to_string(io::stdin())?,
        Some(path) => fs::read_to_string(path)?,
    };

    let config_path = cli
        .config
        .as_deref()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    if cli.config.is_some() && !config_path.exists() {
        log::warn!(
            "config {} not found, using defaults",
            config_path.display()
        );
    }
    let config = Config::load(config_path)?;

    let rendered = match cli.format {
        Format::Html => instructfmt::to_html_with_config(&instructions, &config),
        Format::Json => instructfmt::to_json(&instructions)?,
        Format::Text => instructfmt::to_plain_text(&instructions),
    };

    match &cli.output {
        Some(output) => {
            fs::write(output, rendered)?;
            log::info!("wrote {}", output.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
