use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use tracing::log;
use walkdir::WalkDir;

use crate::{models_api::match_record::MatchRecord, models_external::replay::ReplayJson};

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

pub struct ReplayService;
impl ReplayService {

    /// Directories are searched recursively for *.json files, anything else is taken as a file.
    pub fn expand_paths(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        for path in paths {
            if !path.is_dir() {
                result.push(path.clone());
                continue;
            }
            let before = result.len();
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.with_context(|| format!("Could not read directory: {}", path.display()))?;
                if entry.file_type().is_file() && is_json(entry.path()) {
                    result.push(entry.into_path());
                }
            }
            log::info!("[REPLAY] Found {} replay files in {}", result.len() - before, path.display());
        }
        Ok(result)
    }

    pub fn read(path: &Path) -> anyhow::Result<MatchRecord> {
        let before = Instant::now();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read replay json: {}", path.display()))?;
        let replay: ReplayJson = serde_json::from_str(&data)
            .with_context(|| format!("Could not parse replay json: {}", path.display()))?;
        let record = MatchRecord::try_from(replay.properties)
            .with_context(|| format!("Could not parse replay json: {}", path.display()))?;
        log::debug!("[REPLAY] Read {} {:.2?}", path.display(), before.elapsed());
        Ok(record)
    }

    /// Stops at the first file that can't be read.
    pub fn read_all(paths: &[PathBuf]) -> anyhow::Result<Vec<MatchRecord>> {
        log::info!("[REPLAY] Reading {} files", paths.len());
        paths.iter()
            .map(|e| ReplayService::read(e))
            .collect()
    }
}
