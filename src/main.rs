use clap::{Parser, Subcommand};
use engunits::units::parser::BARE_NUMBER;
use engunits::{Config, DisplayUnit, QuantityKind, UnitProcessor};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "engunits")]
#[command(about = "Engineering unit expression parser and formatter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression to canonical units (in, lb, lb-in, lb/in, lb/in^2)
    Parse {
        #[arg(value_enum)]
        kind: QuantityKind,

        /// Expression, e.g. "3' 4 1/2\"" or "42 kips"
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Unit assumed for numbers without a unit token
        #[arg(short, long)]
        default_unit: Option<String>,

        /// Config file supplying default units
        #[arg(short, long)]
        config: Option<String>,

        /// Print the parse result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a canonical value for display
    Format {
        #[arg(value_enum)]
        display: DisplayUnit,

        #[arg(allow_hyphen_values = true)]
        value: f64,
    },

    /// List the forms that recognize an expression
    Check {
        #[arg(value_enum)]
        kind: QuantityKind,

        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Normalize the quantity fields of a TOML document and print it as JSON
    Normalize {
        /// TOML document path
        path: String,

        /// Config file mapping fields to quantity kinds
        #[arg(short, long)]
        config: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            kind,
            text,
            default_unit,
            config,
            json,
        } => parse_expression(kind, &text, default_unit, config.as_deref(), json),
        Commands::Format { display, value } => {
            println!("{}", engunits::format_value(display, value));
            Ok(())
        }
        Commands::Check { kind, text } => check_expression(kind, &text),
        Commands::Normalize {
            path,
            config,
            output,
        } => normalize_document(&path, &config, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_expression(
    kind: QuantityKind,
    text: &str,
    default_unit: Option<String>,
    config_path: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::empty(),
    };
    let default_unit = default_unit
        .as_deref()
        .or_else(|| config.default_unit(kind));

    let parsed = engunits::parse_detailed(kind, text, default_unit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("{} {}", parsed.value, parsed.canonical_unit);
    }

    Ok(())
}

fn check_expression(kind: QuantityKind, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    if engunits::is_bare_number(text) {
        println!("{}", BARE_NUMBER);
        return Ok(());
    }

    let forms = engunits::matching_forms(kind, text);
    if forms.is_empty() {
        return Err(format!("No {} form recognizes '{}'", kind, text).into());
    }

    for form in forms {
        println!("{}", form.name);
    }

    Ok(())
}

fn normalize_document(
    path: &str,
    config_path: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_from_file(config_path)?;
    let content = std::fs::read_to_string(path)?;
    let document: toml::Table = toml::from_str(&content)?;

    let processor = UnitProcessor::new(config);
    let normalized = processor.process_table(&document);

    let json = serde_json::to_string_pretty(&normalized)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Normalized document written to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
