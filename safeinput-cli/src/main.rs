use anyhow::{Context, Result};
use clap::Parser;
use safeinput::utils::*;
use std::{fs, path::PathBuf, process::ExitCode};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Walks through every kind of validated read, one prompt each.
#[derive(Parser, Debug)]
#[command(name = "safeinput", version)]
struct Cli {
    /// JSON file with terminal settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset, e.g. "safeinput=debug"
    #[arg(long, default_value = "safeinput=warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<TerminalConfig> {
    let Some(path) = path else {
        return Ok(TerminalConfig::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read config file {}", path.display()))?;
    let config: TerminalConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(?config, "loaded terminal config");
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let mut term = Terminal::stdio().with_config(config);

    println!("------------------------------------------------------------");
    println!("                 safeinput demonstration                    ");
    println!("            VERSION:            {}                        ", env!("CARGO_PKG_VERSION"));
    println!("------------------------------------------------------------");

    println!("\n1. Non-empty text:");
    let name = term.read_non_empty_line("Enter your name (cannot be empty)")?;
    println!("You entered: {}", name);

    println!("\n2. Any integer:");
    let age = term.read_int("Enter your age")?;
    println!("You entered: {}", age);

    println!("\n3. Integer in range:");
    let score = term.read_int_in_range("Enter a test score", 0, 100)?;
    println!("You entered: {}", score);

    println!("\n4. Any real number:");
    let price = term.read_float("Enter a price")?;
    println!("You entered: ${:.2}", price);

    println!("\n5. Real number in range:");
    let gpa = term.read_float_in_range("Enter your GPA", 0.0, 4.0)?;
    println!("You entered: {}", gpa);

    println!("\n6. Yes / No:");
    let likes = term.read_yes_no("Do you like programming?")?;
    println!("You answered: {}", if likes { "Yes" } else { "No" });

    println!("\n7. Pattern:");
    let email = term.read_matching("Enter your email address", EMAIL_PATTERN)?;
    println!("You entered: {}", email);

    println!("\nAll reads completed.");
    Ok(())
}
