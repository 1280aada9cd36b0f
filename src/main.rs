use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use grimoire::app::App;
use grimoire::browse::{visible_spells, FilterState, ToggleSet};
use grimoire::catalog::Compendium;
use grimoire::config::Config;
use grimoire::ui;

/// Get the config directory path (~/.config/grimoire/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("grimoire"))
}

#[derive(Parser, Debug)]
#[command(
    name = "grimoire",
    about = "Browse tabletop RPG spells, identities, and abilities in the terminal"
)]
struct Args {
    /// Path to a compendium JSON file (defaults to the embedded compendium)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Path to a config file (defaults to ~/.config/grimoire/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the visible spell list with default filters and exit
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // CLI --data wins over the config's data_path; both absent means the
    // embedded compendium.
    let data_path = args.data.as_deref().or(config.data_path.as_deref());
    let compendium = Compendium::load(data_path).context("Failed to load compendium")?;

    if args.dump {
        dump_spells(&compendium);
        return Ok(());
    }

    let mut app = App::new(compendium, &config);
    ui::run(&mut app)
}

/// Print the visible spell list for default filters (everything active, no
/// search), one line per entry. Useful for scripting and sanity checks.
fn dump_spells(compendium: &Compendium) {
    let buckets = visible_spells(compendium, &FilterState::default(), &ToggleSet::new());
    for bucket in buckets {
        println!("{}", bucket.label);
        for entry in bucket.entries {
            if entry.tags.is_empty() {
                println!("  {}", entry.name);
            } else {
                println!("  {} [{}]", entry.name, entry.tags.join(", "));
            }
        }
    }
}
