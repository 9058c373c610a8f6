use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use bubblestep::core::{generate_with, parse_numbers_limited, render_json, render_log};
use bubblestep::{util, App, Config};
use clap::{Parser, Subcommand, ValueEnum};

/// Step-by-step bubble sort visualizer.
#[derive(Parser)]
#[command(name = "bubblestep", version, about = "Step-by-step bubble sort visualizer")]
struct Cli {
    /// Data directory for config and logs (default: ~/.bubblestep)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Numbers to sort as soon as the UI opens, e.g. "5, 2, 8"
    #[arg(long)]
    input: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full sorting log for a list of numbers and exit.
    Log {
        /// Comma-separated numbers
        numbers: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Leave out comparisons that do not swap
        #[arg(long)]
        skip_no_swap: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir);
    init_logging()?;

    let config = Config::load();

    match cli.command {
        Some(Commands::Log {
            numbers,
            format,
            skip_no_swap,
        }) => {
            let config = if skip_no_swap {
                config.with_record_no_swap(false)
            } else {
                config
            };
            let code = run_log(&config, &numbers, format)?;
            process::exit(code);
        }
        None => {
            let mut app = App::new(config);
            if let Some(text) = cli.input {
                app.start_with(&text);
            }
            app.run().await
        }
    }
}

/// Log to `<data dir>/logs/bubblestep.log`; stdout belongs to the UI
fn init_logging() -> Result<()> {
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    Ok(())
}

/// Execute the `log` subcommand. Returns the process exit code.
fn run_log(config: &Config, numbers: &str, format: OutputFormat) -> Result<i32> {
    let options = config.session_options();
    let values = match parse_numbers_limited(numbers, options.max_values) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(1);
        }
    };

    let trace = generate_with(&values, options.trace);
    match format {
        OutputFormat::Text => print!("{}", render_log(&trace)),
        OutputFormat::Json => println!("{}", render_json(&trace)?),
    }
    Ok(0)
}
