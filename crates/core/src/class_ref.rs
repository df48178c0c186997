//! Class identities returned by a scan.

use crate::error::{Result, ValdrError};
use ristretto_classfile::{ClassAccessFlags, ClassFile};
use serde::Serialize;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl ClassKind {
    fn from_flags(flags: ClassAccessFlags) -> Self {
        if flags.contains(ClassAccessFlags::ANNOTATION) {
            ClassKind::Annotation
        } else if flags.contains(ClassAccessFlags::INTERFACE) {
            ClassKind::Interface
        } else if flags.contains(ClassAccessFlags::ENUM) {
            ClassKind::Enum
        } else {
            ClassKind::Class
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::Annotation => "annotation",
        }
    }
}

/// A class found on the classpath. Equality and hashing use the binary name only.
#[derive(Debug, Clone, Serialize)]
pub struct ClassRef {
    /// Binary name, e.g. `com.acme.model.Person$Address`
    pub name: String,
    /// Classpath root the class was read from
    pub location: PathBuf,
    pub kind: ClassKind,
}

impl ClassRef {
    /// Decode the class stored at `entry` (a `/`-separated resource path) and
    /// check it declares the name its path implies.
    pub fn decode(bytes: Vec<u8>, location: &Path, entry: &str) -> Result<Self> {
        let class = ClassFile::from_bytes(&mut Cursor::new(bytes)).map_err(|e| {
            ValdrError::ClassFormat {
                path: location.to_path_buf(),
                entry: entry.to_string(),
                message: format!("{e:?}"),
            }
        })?;

        let internal_name = class.class_name().map_err(|e| ValdrError::ClassFormat {
            path: location.to_path_buf(),
            entry: entry.to_string(),
            message: format!("{e:?}"),
        })?;

        let expected = entry.strip_suffix(".class").unwrap_or(entry);
        if internal_name != expected {
            return Err(ValdrError::ClassNameMismatch {
                path: location.to_path_buf(),
                entry: entry.to_string(),
                declared: internal_name.replace('/', "."),
            });
        }

        Ok(Self {
            name: internal_name.replace('/', "."),
            location: location.to_path_buf(),
            kind: ClassKind::from_flags(class.access_flags),
        })
    }

    pub fn simple_name(&self) -> &str {
        let tail = self.name.rsplit('.').next().unwrap_or(&self.name);
        tail.rsplit('$').next().unwrap_or(tail)
    }

    pub fn package(&self) -> &str {
        self.name.rsplit_once('.').map(|(pkg, _)| pkg).unwrap_or("")
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassRef {}

impl Hash for ClassRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Scan result, unique by binary name.
#[derive(Debug, Clone, Default)]
pub struct ClassSet {
    classes: BTreeMap<String, ClassRef>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when a class of that name is already present; the
    /// earlier entry is kept.
    pub fn insert(&mut self, class: ClassRef) -> bool {
        if self.contains(&class.name) {
            return false;
        }
        self.classes.insert(class.name.clone(), class);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ClassRef> {
        self.classes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassRef> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl IntoIterator for ClassSet {
    type Item = ClassRef;
    type IntoIter = std::collections::btree_map::IntoValues<String, ClassRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.into_values()
    }
}

impl PartialEq for ClassSet {
    fn eq(&self, other: &Self) -> bool {
        self.classes.len() == other.classes.len() && self.names().eq(other.names())
    }
}
