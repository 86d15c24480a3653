//! Pack discovery and simfile parsing.
//!
//! A pack is a directory of song folders, each holding one simfile. This
//! module turns that directory into the ordered `Song` sequence the
//! summarizer consumes. StepMania's folder rule applies: a `.ssc` next to
//! a `.sm` wins.

pub mod msd;
mod simfile;

pub use simfile::{format_variant, parse_simfile};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::chart::Song;
use crate::error::{Error, Result};

/// A pack directory and the songs parsed out of it, in folder-name order.
#[derive(Debug, Clone)]
pub struct Pack {
    name: String,
    path: PathBuf,
    songs: Vec<Song>,
}

impl Pack {
    /// Scan a pack directory, parsing one simfile per song folder.
    ///
    /// Folders without a simfile are skipped with a warning; a malformed
    /// simfile aborts the scan.
    pub fn scan<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(Error::PackNotFound(path.to_path_buf()));
        }

        let mut folders: Vec<PathBuf> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_dir())
            .collect();
        folders.sort();

        let mut songs = Vec::new();
        for folder in &folders {
            match find_simfile(folder)? {
                Some(simfile_path) => songs.push(parse_simfile(&simfile_path)?),
                None => warn!("No simfile in {:?}, skipping folder", folder),
            }
        }

        let name = pack_name(path);
        info!("Scanned pack {:?}: {} songs", name, songs.len());

        Ok(Self {
            name,
            path: path.to_path_buf(),
            songs,
        })
    }

    /// Pack name, taken from the directory name. Used to derive the
    /// default output file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// Pick the simfile for one song folder, preferring `.ssc` over `.sm`.
fn find_simfile(folder: &Path) -> Result<Option<PathBuf>> {
    let mut sm = None;
    let mut ssc = None;

    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("ssc") => ssc = Some(path),
            Some("sm") => sm = Some(path),
            _ => {}
        }
    }

    Ok(ssc.or(sm))
}

/// Resolve a human-meaningful directory name, seeing through `.` and
/// trailing separators.
fn pack_name(path: &Path) -> String {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pack".to_string())
}
