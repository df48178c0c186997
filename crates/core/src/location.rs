//! Search locations: classpath roots that can hold class files.
//!
//! A root is either a class directory or a JAR/ZIP archive. Archives are
//! detected by their `PK` magic rather than their extension, the same way
//! the JVM accepts any zip file on the classpath.

use crate::class_ref::ClassRef;
use crate::error::{Result, ValdrError};
use crate::filter::NamePredicate;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;
use zip::ZipArchive;

/// Entries that end in `.class` but are not loadable types.
const DESCRIPTORS: [&str; 2] = ["module-info.class", "package-info.class"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchLocation {
    Directory(PathBuf),
    Archive(PathBuf),
}

impl SearchLocation {
    /// Classify a classpath entry. Missing entries and regular files that are
    /// not zip archives yield `None`.
    pub fn open(path: &Path) -> Result<Option<Self>> {
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Classpath entry does not exist: {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(ValdrError::io(path, e)),
        };

        if metadata.is_dir() {
            return Ok(Some(SearchLocation::Directory(path.to_path_buf())));
        }

        let mut file = File::open(path).map_err(|e| ValdrError::io(path, e))?;
        let mut magic = [0u8; 2];
        match file.read_exact(&mut magic) {
            Ok(()) if magic == [0x50, 0x4B] => Ok(Some(SearchLocation::Archive(path.to_path_buf()))),
            Ok(()) => {
                debug!("Classpath entry is not an archive: {}", path.display());
                Ok(None)
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                debug!("Classpath entry is empty: {}", path.display());
                Ok(None)
            }
            Err(e) => Err(ValdrError::io(path, e)),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            SearchLocation::Directory(p) | SearchLocation::Archive(p) => p,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchLocation::Directory(_) => "directory",
            SearchLocation::Archive(_) => "archive",
        }
    }

    /// Whether any of the packages (`/`-separated, e.g. `com/acme/model`)
    /// exists under this root.
    pub fn contains_any_package(&self, package_dirs: &[String]) -> Result<bool> {
        if package_dirs.is_empty() {
            return Ok(false);
        }
        match self {
            SearchLocation::Directory(root) => {
                Ok(package_dirs.iter().any(|dir| root.join(dir).is_dir()))
            }
            SearchLocation::Archive(path) => {
                let archive = open_archive(path)?;
                let found = archive.file_names().any(|name| {
                    package_dirs.iter().any(|dir| {
                        name.strip_prefix(dir.as_str())
                            .is_some_and(|rest| rest.starts_with('/'))
                    })
                });
                Ok(found)
            }
        }
    }

    /// Decode every class whose resource name passes `predicate`.
    pub fn classes(&self, predicate: &NamePredicate) -> Result<Vec<ClassRef>> {
        match self {
            SearchLocation::Directory(root) => directory_classes(root, predicate),
            SearchLocation::Archive(path) => archive_classes(path, predicate),
        }
    }
}

/// `com/acme/Person.class` -> `com.acme.Person.class`, or `None` for
/// entries that are not classes.
pub fn resource_name(entry: &str) -> Option<String> {
    if !entry.ends_with(".class") || entry.starts_with("META-INF/") {
        return None;
    }
    let file_name = entry.rsplit('/').next().unwrap_or(entry);
    if DESCRIPTORS.contains(&file_name) {
        return None;
    }
    Some(entry.replace('/', "."))
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path).map_err(|e| ValdrError::io(path, e))?;
    ZipArchive::new(file).map_err(|e| ValdrError::archive(path, e))
}

fn directory_classes(root: &Path, predicate: &NamePredicate) -> Result<Vec<ClassRef>> {
    let mut classes = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            ValdrError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let entry_name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let Some(name) = resource_name(&entry_name) else {
            continue;
        };
        if !predicate.accepts(&name) {
            continue;
        }

        let bytes = std::fs::read(entry.path()).map_err(|e| ValdrError::io(entry.path(), e))?;
        classes.push(ClassRef::decode(bytes, root, &entry_name)?);
    }

    Ok(classes)
}

fn archive_classes(path: &Path, predicate: &NamePredicate) -> Result<Vec<ClassRef>> {
    let mut archive = open_archive(path)?;
    let mut classes = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| ValdrError::archive(path, e))?;
        if entry.is_dir() {
            continue;
        }

        let entry_name = entry.name().to_string();
        let Some(name) = resource_name(&entry_name) else {
            continue;
        };
        if !predicate.accepts(&name) {
            continue;
        }

        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| ValdrError::io(path, e))?;
        classes.push(ClassRef::decode(bytes, path, &entry_name)?);
    }

    Ok(classes)
}
