//! Classpath scanning for the bean-validation rule generator.
//!
//! Locates the model classes whose constraint annotations are turned into
//! client-side validation rules: every class on the classpath under one of
//! the configured package prefixes, minus the explicitly excluded ones.

pub mod class_ref;
pub mod classpath;
pub mod error;
pub mod filter;
pub mod location;
pub mod logging;
pub mod options;
pub mod scanner;

#[cfg(test)]
pub(crate) mod testing;

pub use class_ref::{ClassKind, ClassRef, ClassSet};
pub use classpath::Classpath;
pub use error::{Result, ValdrError};
pub use filter::{NameFilter, NamePredicate};
pub use location::SearchLocation;
pub use options::Options;
pub use scanner::ClasspathScanner;
