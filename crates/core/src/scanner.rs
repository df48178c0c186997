//! Finds the model classes that need to be parsed for constraint annotations.
//!
//! The scan runs in three steps:
//! 1. Classpath roots containing one of the model packages become search locations
//! 2. A name predicate is built from the package prefixes and excluded classes
//! 3. Every class entry of the search locations passing the predicate is decoded
//!
//! Nothing is cached; each call walks the filesystem again.

use crate::class_ref::ClassSet;
use crate::classpath::Classpath;
use crate::error::Result;
use crate::filter::NamePredicate;
use crate::location::SearchLocation;
use crate::options::Options;
use indexmap::IndexSet;
use tracing::{debug, info};

pub struct ClasspathScanner<'a> {
    options: &'a Options,
    classpath: Classpath,
}

impl<'a> ClasspathScanner<'a> {
    /// Scanner over the classpath named in `options`, or `CLASSPATH` when
    /// the options name none.
    pub fn new(options: &'a Options) -> Self {
        let classpath = if options.classpath().is_empty() {
            Classpath::from_env()
        } else {
            Classpath::new(options.classpath().iter().cloned())
        };
        Self { options, classpath }
    }

    pub fn with_classpath(options: &'a Options, classpath: Classpath) -> Self {
        Self { options, classpath }
    }

    pub fn classpath(&self) -> &Classpath {
        &self.classpath
    }

    /// Scan the classpath for all classes in the configured model packages,
    /// leaving out excluded classes.
    pub fn find_classes_to_parse(&self) -> Result<ClassSet> {
        let start = std::time::Instant::now();
        let locations = self.search_locations()?;
        let predicate = self.build_predicate()?;

        let mut classes = ClassSet::new();
        let mut shadowed = 0usize;

        for location in &locations {
            let found = location.classes(&predicate)?;
            debug!(
                "{} classes matched in {} {}",
                found.len(),
                location.kind(),
                location.path().display()
            );
            for class in found {
                if !classes.insert(class) {
                    shadowed += 1;
                }
            }
        }

        if shadowed > 0 {
            debug!("{} classes shadowed by earlier classpath entries", shadowed);
        }
        info!(
            "Classpath scan complete: {} classes from {} locations in {:?}",
            classes.len(),
            locations.len(),
            start.elapsed()
        );

        Ok(classes)
    }

    /// Classpath roots holding at least one configured package, in classpath order.
    pub fn search_locations(&self) -> Result<IndexSet<SearchLocation>> {
        let package_dirs: Vec<String> = self
            .options
            .effective_packages()
            .map(|p| p.replace('.', "/"))
            .collect();

        let mut locations = IndexSet::new();
        if package_dirs.is_empty() {
            debug!("No model packages configured");
            return Ok(locations);
        }

        for root in self.classpath.iter() {
            let Some(location) = SearchLocation::open(root)? else {
                continue;
            };
            if location.contains_any_package(&package_dirs)? {
                debug!("Search location: {}", location.path().display());
                locations.insert(location);
            }
        }

        Ok(locations)
    }

    fn build_predicate(&self) -> Result<NamePredicate> {
        let mut predicate = NamePredicate::new();
        for package in self.options.effective_packages() {
            predicate = predicate.include(package);
        }
        for class_name in self.options.excluded_class_names() {
            predicate = predicate.exclude(class_name)?;
        }
        Ok(predicate)
    }
}
