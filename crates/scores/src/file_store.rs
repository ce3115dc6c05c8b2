//! JSON file score store.
//!
//! The whole leaderboard is a JSON array of `{"player_name", "score"}` objects
//! in submission order. Every submit rewrites the file through a temporary
//! sibling and a rename, so a crash mid-write leaves the previous file intact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ScoreError;
use crate::store::{rank, validate_name, ScoreEntry, ScoreStore};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing or empty file is an empty leaderboard.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Vec::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), entries = entries.len(), "score file loaded");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), ScoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let json = serde_json::to_vec_pretty(&self.entries)?;
        let tmp = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "scores.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ScoreStore for JsonFileStore {
    fn submit_score(&mut self, player_name: &str, score: u32) -> Result<(), ScoreError> {
        let player_name = validate_name(player_name)?;
        self.entries.push(ScoreEntry {
            player_name: player_name.clone(),
            score,
        });

        if let Err(e) = self.persist() {
            // Keep memory in step with what is on disk.
            self.entries.pop();
            return Err(e);
        }

        info!(player = %player_name, score, path = %self.path.display(), "score saved");
        Ok(())
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, ScoreError> {
        Ok(rank(&self.entries, limit))
    }
}
