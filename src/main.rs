use chrono::Local;
use clap::{Parser, Subcommand};
use gallery_gen::{config, generate, output};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Overrides applied on top of the loaded config.
#[derive(clap::Args, Clone)]
struct PathArgs {
    /// TOML file overriding the built-in categories and paths
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Gallery root holding one folder per category [default: assets/gallery]
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Manifest output file [default: gallery-config.json]
    #[arg(long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "gallery-gen")]
#[command(about = "Generate the gallery manifest from categorised photo folders")]
#[command(long_about = "\
Generate the gallery manifest from categorised photo folders

Run without arguments from the site root. Every category has a folder under
the gallery root; images placed there are listed in gallery-config.json,
newest first, on the next run.

  assets/gallery/
  ├── metalines/       # Metalinės konstrukcijos
  ├── baldai/          # Baldai
  ├── automobiliai/    # Automobilių dalys
  └── pramone/         # Pramoninė įranga

Accepted extensions: jpg, jpeg, png, webp, gif (any case). Missing category
folders are created. The manifest is rewritten from scratch on every run.

Run 'gallery-gen gen-config' to print a documented config file.")]
#[command(version = env!("GALLERY_GEN_VERSION"))]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Default)]
enum Command {
    /// Scan the gallery and write the manifest (default)
    #[default]
    Generate,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Generate => match run_generate(&cli.paths) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                output::print_failure(&*err);
                ExitCode::FAILURE
            }
        },
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            ExitCode::SUCCESS
        }
    }
}

fn run_generate(paths: &PathArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(paths)?;

    println!("==> Scanning {}", config.root.display());
    let report = generate::generate(&config, Local::now())?;
    output::print_report(&report);

    println!();
    output::print_next_steps(&config);
    Ok(())
}

/// Load the config file (if any), then apply command-line path overrides.
fn resolve_config(paths: &PathArgs) -> Result<config::GalleryConfig, config::ConfigError> {
    let mut config = config::load_config(paths.config.as_deref())?;
    if let Some(root) = &paths.root {
        config.root = root.clone();
    }
    if let Some(output) = &paths.output {
        config.output = output.clone();
    }
    Ok(config)
}
