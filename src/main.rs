//! Command line entry point: exports a beatmap set directory.

use clap::Parser;
use legacy_export::export::{DirectoryStorage, archive_name};
use legacy_export::{BeatmapSet, ExportConfig, LegacyExporter};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Export a beatmap set as legacy-compatible files")]
struct Cli {
    /// Directory holding the beatmap set.
    set_dir: PathBuf,

    /// Directory the exported files are written to.
    out_dir: PathBuf,

    /// Export settings (TOML). Defaults are used when the file is missing.
    #[arg(short, long, default_value = "export.toml")]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let cli = Cli::parse();

    let config = ExportConfig::load(&cli.config)?;
    let set = BeatmapSet::scan(&cli.set_dir)?;
    let storage = DirectoryStorage::new(&cli.set_dir);

    let report = LegacyExporter::new(&config).export_set(&set, &storage);

    for file in &report.files {
        let target = cli.out_dir.join(&file.name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &file.data)?;
    }

    log::info!(
        "MAIN: wrote {} files for {} to {:?}",
        report.files.len(),
        archive_name(&set.name),
        cli.out_dir
    );

    for name in &report.omitted {
        log::warn!("MAIN: omitted {}", name);
    }

    if !report.failures.is_empty() {
        for (name, e) in &report.failures {
            log::error!("MAIN: {}: {}", name, e);
        }
        return Err(format!("{} files failed to export", report.failures.len()).into());
    }

    Ok(())
}
