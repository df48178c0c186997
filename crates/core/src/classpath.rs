//! Classpath roots the scanner searches.
//!
//! Mirrors JVM launcher rules: entries are a platform path list, a trailing
//! `*` expands to the JAR files of that directory, and an unset `CLASSPATH`
//! means the current directory.

use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classpath {
    entries: IndexSet<PathBuf>,
}

impl Classpath {
    pub fn new(entries: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut classpath = Self::default();
        for entry in entries {
            classpath.push(entry);
        }
        classpath
    }

    /// Parse a platform path list (`a:b/*:c.jar` on Unix, `;` on Windows).
    pub fn parse(list: &str) -> Self {
        Self::new(std::env::split_paths(list).filter(|p| !p.as_os_str().is_empty()))
    }

    pub fn from_env() -> Self {
        Self::from_var(std::env::var("CLASSPATH").ok().as_deref())
    }

    /// Classpath for a `CLASSPATH` value; unset or blank means the current directory.
    pub fn from_var(value: Option<&str>) -> Self {
        match value {
            Some(list) if !list.trim().is_empty() => Self::parse(list),
            _ => Self::new([PathBuf::from(".")]),
        }
    }

    /// Adds a root, expanding `dir/*`. Duplicates keep their first position.
    pub fn push(&mut self, entry: PathBuf) {
        match wildcard_dir(&entry) {
            Some(dir) => {
                for jar in expand_wildcard(dir) {
                    self.entries.insert(jar);
                }
            }
            None => {
                self.entries.insert(entry);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Directory a `*` entry expands; a bare `*` is the current directory.
fn wildcard_dir(entry: &Path) -> Option<&Path> {
    if entry.file_name().and_then(|n| n.to_str()) != Some("*") {
        return None;
    }
    let dir = entry
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Some(dir)
}

fn expand_wildcard(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Skipping classpath wildcard {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut jars: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
        })
        .collect();
    jars.sort();
    jars
}
