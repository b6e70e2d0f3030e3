//! Settings tool entry point.
//!
//! Loads the settings from an SD card image directory the same way the
//! application does at startup, logs the effective configuration, prints the
//! settings document, and optionally resolves resource paths or writes the
//! normalized document back.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ LanguageResolver::detect()   -- host language, queried once
//!  └─ SettingsService::new()       -- SD card + RomFS explorers
//!       ├─ load()                  -- defaults + settings.json
//!       ├─ path_for_resource()     -- for each --resource
//!       └─ save()                  -- with --save
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use leaf_core::flatten_settings;
use leaf_settings::application::collaborators::ResultHandler;
use leaf_settings::application::language::LanguageResolver;
use leaf_settings::application::settings_service::SettingsService;
use leaf_settings::infrastructure::locale::EnvLocale;
use leaf_settings::infrastructure::report::LogResultHandler;
use leaf_settings::infrastructure::scheme::RandomSchemeGenerator;
use leaf_settings::infrastructure::storage::fs_explorer::FsExplorer;

/// Inspect and normalize the title manager's settings file.
#[derive(Debug, Parser)]
#[command(name = "leaf-settings", version, about)]
struct Args {
    /// Directory mounted as `sdmc:/`.
    #[arg(long, env = "LEAF_SD_ROOT", default_value = "sdmc")]
    sd_root: PathBuf,

    /// Directory mounted as `romfs:/` (bundled resources).
    #[arg(long, env = "LEAF_ROMFS_ROOT", default_value = "romfs")]
    romfs_root: PathBuf,

    /// Resource path to resolve; may be given several times.
    #[arg(long = "resource", value_name = "PATH")]
    resources: Vec<String>,

    /// Write the loaded settings back in normalized form.
    #[arg(long)]
    save: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let reporter = LogResultHandler;

    let language =
        LanguageResolver::detect(&EnvLocale).context("could not determine the host language")?;
    let service = SettingsService::new(
        Arc::new(FsExplorer::sd_card(&args.sd_root)),
        Arc::new(FsExplorer::romfs(&args.romfs_root)),
        Arc::new(RandomSchemeGenerator::new()),
        language,
    );

    let settings = match service.load() {
        Ok(settings) => settings,
        Err(e) => {
            reporter.handle_result(&e, "loading settings");
            return Err(e).context("failed to load settings");
        }
    };

    info!(
        language = ?service.language(&settings),
        external_romfs = settings.external_romfs().unwrap_or("-"),
        menu_items = settings.default_menu_item_count(),
        "effective settings"
    );

    let document = flatten_settings(&settings).to_value()?;
    println!("{}", serde_json::to_string_pretty(&document)?);

    for res in &args.resources {
        println!("{res} -> {}", service.path_for_resource(&settings, res));
    }

    if args.save {
        if let Err(e) = service.save(&settings) {
            reporter.handle_result(&e, "saving settings");
            return Err(e).context("failed to save settings");
        }
    }

    Ok(())
}
