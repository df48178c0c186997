//! Scan configuration.
//!
//! Reads the same JSON file the validation rule generator is configured with
//! (`modelPackages`, `excludedClasses`). Keys belonging to later pipeline
//! stages, such as `outputFile`, are accepted and ignored.

use crate::error::{Result, ValdrError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Package name prefixes whose classes are parsed, e.g. `com.acme.model`
    model_packages: Vec<String>,
    /// Fully-qualified names of classes to leave out
    excluded_classes: Vec<String>,
    /// Explicit classpath roots. Empty means "use `CLASSPATH`".
    classpath: Vec<PathBuf>,
}

impl Options {
    pub fn new<P, E>(model_packages: P, excluded_classes: E) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            model_packages: model_packages.into_iter().map(Into::into).collect(),
            excluded_classes: excluded_classes.into_iter().map(Into::into).collect(),
            classpath: Vec::new(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ValdrError::io(path, e))?;
        Self::from_json(&content).map_err(|source| ValdrError::Options {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn with_classpath(mut self, classpath: impl IntoIterator<Item = PathBuf>) -> Self {
        self.classpath = classpath.into_iter().collect();
        self
    }

    /// Appends packages and exclusions from another source (e.g. command line flags).
    pub fn extend<P, E>(&mut self, model_packages: P, excluded_classes: E)
    where
        P: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        self.model_packages.extend(model_packages);
        self.excluded_classes.extend(excluded_classes);
    }

    pub fn model_package_names(&self) -> &[String] {
        &self.model_packages
    }

    pub fn excluded_class_names(&self) -> &[String] {
        &self.excluded_classes
    }

    pub fn classpath(&self) -> &[PathBuf] {
        &self.classpath
    }

    /// Configured prefixes with blank entries dropped.
    pub fn effective_packages(&self) -> impl Iterator<Item = &str> {
        self.model_packages
            .iter()
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
    }
}
