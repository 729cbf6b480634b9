//! Beatmap set description: files, their hashes and which ones are charts.

use crate::error::ConvertResult;
use crate::legacy;
use md5::Context;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// A file of a beatmap set, named relative to the set root with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFile {
    pub name: String,
    pub hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct BeatmapSet {
    pub name: String,
    pub files: Vec<SetFile>,
    chart_hashes: HashSet<String>,
}

impl BeatmapSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            chart_hashes: HashSet::new(),
        }
    }

    /// Registers a file. Files whose content is an `.osu` chart are recorded
    /// as charts, whatever their name.
    pub fn add_file(&mut self, name: impl Into<String>, bytes: &[u8]) -> &SetFile {
        let hash = content_hash(bytes);
        if legacy::is_chart(bytes) {
            self.chart_hashes.insert(hash.clone());
        }

        self.files.push(SetFile {
            name: name.into(),
            hash,
        });
        &self.files[self.files.len() - 1]
    }

    /// Whether the file is one of the set's charts, by content hash.
    pub fn is_chart(&self, file: &SetFile) -> bool {
        self.chart_hashes.contains(&file.hash)
    }

    pub fn chart_count(&self) -> usize {
        self.files.iter().filter(|f| self.is_chart(f)).count()
    }

    /// Builds a set from every file under `root`, in a stable order.
    pub fn scan(root: &Path) -> ConvertResult<Self> {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut set = Self::new(name);

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            let bytes = fs::read(entry.path())?;
            set.add_file(relative, &bytes);
        }

        log::info!(
            "SET: scanned {:?} ({} files, {} charts)",
            root,
            set.files.len(),
            set.chart_count()
        );

        Ok(set)
    }
}

/// MD5 of a file's content, as lowercase hex.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut context = Context::new();
    context.consume(bytes);
    format!("{:x}", context.finalize())
}
