//! Include/exclude rules over class resource names.
//!
//! Candidates are resource names in dotted form, `com.acme.model.Person.class`.
//! Includes are plain string prefixes; excludes are anchored patterns matching
//! exactly one class, so `com.acme.model.Person` never drops
//! `com.acme.model.PersonDto` or the nested `com.acme.model.Person$Address`.

use crate::error::Result;
use regex::Regex;

/// A single rule.
#[derive(Debug, Clone)]
pub enum NameFilter {
    Include(String),
    Exclude(Regex),
}

impl NameFilter {
    pub fn prefix(package: &str) -> Self {
        NameFilter::Include(package.to_string())
    }

    /// Rejects exactly `class_name` (dots and `$` taken literally).
    pub fn exact_class(class_name: &str) -> Result<Self> {
        let pattern = format!(r"^{}\.class$", regex::escape(class_name));
        Ok(NameFilter::Exclude(Regex::new(&pattern)?))
    }

    fn matches(&self, resource_name: &str) -> bool {
        match self {
            NameFilter::Include(prefix) => resource_name.starts_with(prefix.as_str()),
            NameFilter::Exclude(pattern) => pattern.is_match(resource_name),
        }
    }
}

/// Accepts a name matching any include and no exclude. Exclusion wins.
#[derive(Debug, Clone, Default)]
pub struct NamePredicate {
    includes: Vec<NameFilter>,
    excludes: Vec<NameFilter>,
}

impl NamePredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, package: &str) -> Self {
        self.includes.push(NameFilter::prefix(package));
        self
    }

    pub fn exclude(mut self, class_name: &str) -> Result<Self> {
        self.excludes.push(NameFilter::exact_class(class_name)?);
        Ok(self)
    }

    pub fn accepts(&self, resource_name: &str) -> bool {
        if self.excludes.iter().any(|f| f.matches(resource_name)) {
            return false;
        }
        self.includes.iter().any(|f| f.matches(resource_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicate() -> NamePredicate {
        NamePredicate::new()
            .include("com.acme.model")
            .exclude("com.acme.model.Internal")
            .unwrap()
    }

    #[test]
    fn test_prefix_includes_subpackages() {
        let p = predicate();
        assert!(p.accepts("com.acme.model.Person.class"));
        assert!(p.accepts("com.acme.model.billing.Invoice.class"));
        assert!(!p.accepts("com.acme.service.PersonService.class"));
    }

    #[test]
    fn test_exclusion_is_exact() {
        let p = predicate();
        assert!(!p.accepts("com.acme.model.Internal.class"));
        assert!(p.accepts("com.acme.model.InternalDto.class"));
        assert!(p.accepts("com.acme.model.sub.com.acme.model.Internal.class"));
        assert!(p.accepts("com.acme.model.Internal$Detail.class"));
    }

    #[test]
    fn test_exclusion_dots_are_literal() {
        let p = predicate();
        assert!(p.accepts("com.acme.model.InternalXclass"));

        let broad = NamePredicate::new()
            .include("com")
            .exclude("com.acme.model.Internal")
            .unwrap();
        assert!(broad.accepts("comXacmeXmodelXInternal.class"));
    }

    #[test]
    fn test_exclusion_is_case_sensitive() {
        let p = predicate();
        assert!(p.accepts("com.acme.model.internal.class"));
    }

    #[test]
    fn test_nested_class_excluded_only_when_named() {
        let p = NamePredicate::new()
            .include("com.acme")
            .exclude("com.acme.Outer$Inner")
            .unwrap();
        assert!(!p.accepts("com.acme.Outer$Inner.class"));
        assert!(p.accepts("com.acme.Outer.class"));
    }

    #[test]
    fn test_no_includes_rejects_everything() {
        let p = NamePredicate::new();
        assert!(!p.accepts("com.acme.model.Person.class"));
    }
}
