use std::{
    io::{BufWriter, Write, stdout},
    path::PathBuf,
};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use serde::Serialize;
use sound_indexer::{
    Settings, constants, filter, filter::SearchFilter, index_sound_data,
    models::shared::Parseable, utils,
};
use tracing::{Level, debug, info};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,
    /// Settings document holding the source paths.
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    asset_index: Option<PathBuf>,
    #[arg(long, value_name = "DIR")]
    objects_dir: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    sounds_json: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    language_json: Option<PathBuf>,
    /// Only print events whose name or id contains every word.
    #[arg(short, long, default_value = "")]
    query: String,
    #[arg(short, long)]
    category: Option<String>,
    /// Print the categories and their event counts instead of the events.
    #[arg(long)]
    categories: bool,
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// Settings file values, overridden by any paths given on the command line.
    fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::parse_from_path(path).context("Failed to read settings")?,
            None => Settings::default(),
        };

        let overrides = [
            (&self.asset_index, &mut settings.asset_index_path),
            (&self.objects_dir, &mut settings.objects_dir),
            (&self.sounds_json, &mut settings.sounds_json_path),
            (&self.language_json, &mut settings.language_json_path),
        ];
        for (flag, target) in overrides {
            if let Some(path) = flag {
                *target = path.clone();
            }
        }

        let unset = settings.unset_paths();
        ensure!(
            unset.is_empty(),
            "Settings are missing required paths: {}",
            unset.join(", ")
        );
        Ok(settings)
    }
}

#[derive(Serialize)]
struct CategorySummary<'a> {
    category: &'a str,
    label: &'a str,
    count: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::setup_logger(
        if cli.verbose {
            Level::TRACE
        } else {
            Level::INFO
        },
        cli.log_dir.as_deref(),
    )
    .context("Failed to setup the logger")?;

    let settings = cli.resolve_settings()?;
    debug!("Indexing with {:?}", settings);

    let events = index_sound_data(&settings).context("Failed to index sound data")?;
    info!("Indexed {} sound events", events.len());

    let mut writer = BufWriter::new(stdout().lock());
    if cli.categories {
        let counts = filter::category_counts(&events);
        let summary: Vec<CategorySummary> = counts
            .iter()
            .map(|(category, count)| CategorySummary {
                category,
                label: constants::category_label(category).unwrap_or(category.as_str()),
                count: *count,
            })
            .collect();
        serde_json::to_writer_pretty(&mut writer, &summary)
            .context("Failed to write categories")?;
    } else {
        let search = SearchFilter::new(&cli.query, cli.category.as_deref());
        let shown = search.apply(&events);
        info!("Showing {} / {}", shown.len(), events.len());
        serde_json::to_writer_pretty(&mut writer, &shown).context("Failed to write events")?;
    }
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
