use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use sigcraft::{
    check_contrast, decode, encode_with, to_plain_text, validate_settings, ColorMode,
    RenderOptions, Settings, SignatureError,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "sigcraft")]
#[command(about = "Render, import and check HTML email signatures", long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a settings file (YAML or JSON) to HTML
    Render {
        settings: PathBuf,
        /// Use the dark signature variant
        #[arg(long)]
        dark: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Recover settings from signature HTML
    Import {
        html: PathBuf,
        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
        /// Write to a file instead of stdout; format follows the extension
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the plain-text rendition of signature HTML
    Text { html: PathBuf },
    /// Validate settings files and report low-contrast colors
    Check {
        #[arg(required = true)]
        settings: Vec<PathBuf>,
        /// Check contrast against the dark preview background
        #[arg(long)]
        preview_dark: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render { settings, dark, out } => {
            let loaded = load_settings(&settings)?;
            let options = if dark {
                RenderOptions::dark()
            } else {
                RenderOptions::default()
            };
            emit(&encode_with(&loaded, &options), out.as_deref())?;
        }
        Commands::Import { html, json, out } => {
            let markup = read(&html)?;
            let Some(settings) = decode(&markup) else {
                bail!(
                    "{} does not look like a signature this tool can import",
                    html.display()
                );
            };
            match out {
                Some(path) => settings
                    .save(&path)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None if json => println!("{}", settings.to_json_string()?),
                None => print!("{}", settings.to_yaml_string()?),
            }
        }
        Commands::Text { html } => {
            println!("{}", to_plain_text(&read(&html)?));
        }
        Commands::Check {
            settings,
            preview_dark,
        } => {
            let mode = if preview_dark {
                ColorMode::Dark
            } else {
                ColorMode::Light
            };
            let mut exit_code = 0;
            for path in settings {
                if !check_file(&path, mode) {
                    exit_code = 1;
                }
            }
            process::exit(exit_code);
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "sigcraft=debug",
        _ => "sigcraft=trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    Settings::load(path).with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn emit(content: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

/// Prints the outcome for one file; `false` when it has errors.
fn check_file(path: &Path, mode: ColorMode) -> bool {
    let result = Settings::load(path).and_then(|s| validate_settings(&s).map(|()| s));
    match result {
        Ok(settings) => {
            println!("✓ {} is valid", path.display());
            for warning in check_contrast(&settings.style, mode) {
                println!(
                    "  warning: {} color {} has contrast {:.2}:1 against {} (below 4.5:1)",
                    warning.role.as_str(),
                    warning.color,
                    warning.ratio,
                    warning.background
                );
            }
            true
        }
        Err(e) => {
            eprintln!("✗ {} has errors:", path.display());
            print_error(&e);
            false
        }
    }
}

fn print_error(error: &SignatureError) {
    match error {
        SignatureError::InvalidColor { property, value } => {
            eprintln!("  Invalid color for '{}':", property);
            eprintln!("    '{}' is not a #rrggbb hex color", value);
        }
        SignatureError::DuplicateField { field } => {
            eprintln!("  Field '{}' appears more than once in fieldOrder", field);
        }
        SignatureError::Yaml(e) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", e);
        }
        SignatureError::Json(e) => {
            eprintln!("  JSON error:");
            eprintln!("    {}", e);
        }
        other => eprintln!("  {}", other),
    }
}
