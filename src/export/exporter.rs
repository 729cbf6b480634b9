//! Exports a beatmap set so that legacy clients can read every chart in it.

use crate::config::ExportConfig;
use crate::convert::{PathSimplifier, to_legacy_compatible};
use crate::error::{ConvertError, ConvertResult};
use crate::export::set::{BeatmapSet, SetFile};
use crate::export::storage::{SetStorage, read_fully};
use crate::legacy::{LegacyEncoder, decode_chart, decode_skin};
use crossbeam_channel::unbounded;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Extension of exported set archives.
pub const FILE_EXTENSION: &str = ".osz";

pub fn archive_name(set_name: &str) -> String {
    format!("{}{}", set_name, FILE_EXTENSION)
}

/// A file ready to be written into the exported archive.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Outcome of exporting a set. Each list is in set order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub files: Vec<ExportedFile>,
    /// Files left out because their data could not be read.
    pub omitted: Vec<String>,
    pub failures: Vec<(String, ConvertError)>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.omitted.is_empty() && self.failures.is_empty()
    }
}

type FileOutcome = ConvertResult<Option<Cursor<Vec<u8>>>>;

pub struct LegacyExporter {
    simplifier: PathSimplifier,
    workers: usize,
}

impl LegacyExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            simplifier: PathSimplifier::new(config),
            workers: config.worker_count(),
        }
    }

    /// Produces the exported bytes of one set file.
    ///
    /// Non-chart files pass through unchanged. Charts are read twice, once
    /// for their content and once for their skin, then truncated, simplified
    /// and re-encoded. `Ok(None)` means the file had no data to export.
    pub fn file_contents<S: SetStorage + ?Sized>(
        &self,
        set: &BeatmapSet,
        file: &SetFile,
        storage: &S,
    ) -> FileOutcome {
        if !set.is_chart(file) {
            return Ok(read_fully(storage, &file.name).map(Cursor::new));
        }

        match self.convert_chart(&file.name, storage) {
            Ok(encoded) => Ok(Some(encoded)),
            Err(ConvertError::ResourceUnavailable(what)) => {
                log::warn!("EXPORT: omitting {}: no {} data", file.name, what);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn convert_chart<S: SetStorage + ?Sized>(
        &self,
        name: &str,
        storage: &S,
    ) -> ConvertResult<Cursor<Vec<u8>>> {
        let chart_bytes = read_resource(storage, name, "chart")?;
        let (mut content, document) = decode_chart(&chart_bytes)?;

        let skin_bytes = read_resource(storage, name, "skin")?;
        let skin = decode_skin(&skin_bytes)?;

        to_legacy_compatible(&mut content, &self.simplifier)?;

        let encoded = LegacyEncoder::new(&skin).encode(&content, document)?;
        log::debug!("EXPORT: converted {} ({})", name, content.display_name());

        Ok(encoded)
    }

    /// Exports every file of the set on a pool of worker threads.
    ///
    /// A failing file is recorded in the report and never stops the others.
    pub fn export_set<S: SetStorage + ?Sized>(&self, set: &BeatmapSet, storage: &S) -> ExportReport {
        log::info!(
            "EXPORT: {} ({} files, {} workers)",
            archive_name(&set.name),
            set.files.len(),
            self.workers
        );

        let report = self.collect_outcomes(set, |file| self.file_contents(set, file, storage));

        log::info!(
            "EXPORT: {} done ({} exported, {} omitted, {} failed)",
            archive_name(&set.name),
            report.files.len(),
            report.omitted.len(),
            report.failures.len()
        );

        report
    }

    fn collect_outcomes<F>(&self, set: &BeatmapSet, convert: F) -> ExportReport
    where
        F: Fn(&SetFile) -> FileOutcome + Sync,
    {
        let (tx, rx) = unbounded::<(usize, FileOutcome)>();
        let next = AtomicUsize::new(0);
        let workers = self.workers.clamp(1, set.files.len().max(1));

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let next = &next;
                let convert = &convert;

                scope.spawn(move || {
                    loop {
                        let index = next.fetch_add(1, Ordering::Relaxed);
                        let Some(file) = set.files.get(index) else {
                            break;
                        };

                        if tx.send((index, convert(file))).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(tx);

        let mut outcomes: Vec<(usize, FileOutcome)> = rx.iter().collect();
        outcomes.sort_by_key(|(index, _)| *index);

        let mut report = ExportReport::default();
        for (index, outcome) in outcomes {
            let name = set.files[index].name.clone();

            match outcome {
                Ok(Some(cursor)) => report.files.push(ExportedFile {
                    name,
                    data: cursor.into_inner(),
                }),
                Ok(None) => report.omitted.push(name),
                Err(e) => {
                    log::warn!("EXPORT: failed to convert {}: {}", name, e);
                    report.failures.push((name, e));
                }
            }
        }

        report
    }
}

fn read_resource<S: SetStorage + ?Sized>(
    storage: &S,
    name: &str,
    what: &str,
) -> ConvertResult<Vec<u8>> {
    read_fully(storage, name).ok_or_else(|| ConvertError::ResourceUnavailable(what.to_string()))
}

impl Default for LegacyExporter {
    fn default() -> Self {
        Self::new(&ExportConfig::default())
    }
}
