//! Email domain to institution resolution
//!
//! Resolution runs three strategies in a fixed order and stops at the first hit:
//!
//! 1. [`MatchStrategy::Exact`]: the domain is itself a table key.
//! 2. [`MatchStrategy::LabelSuffix`]: strip leading labels one at a time and
//!    look up each remaining suffix of two or more labels.
//! 3. [`MatchStrategy::DotSuffix`]: scan the table in order for a key that the
//!    domain ends with, preceded by a `.`.
//!
//! Strategies 2 and 3 overlap: anything the dot-suffix scan finds, the label
//! scan has normally found already. Both are kept so that behavior stays
//! identical for odd inputs such as empty labels.

use std::fmt;

use super::table::DomainTable;

/// Which strategy produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Exact,
    LabelSuffix,
    DotSuffix,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::LabelSuffix => "label_suffix",
            Self::DotSuffix => "dot_suffix",
        };
        f.write_str(name)
    }
}

/// A successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Institution display name
    pub school: &'a str,
    /// Table key that matched
    pub matched_domain: &'a str,
    pub strategy: MatchStrategy,
}

/// Resolver errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Malformed email address: missing '@'")]
    MalformedInput,
}

/// Extract the normalized domain of an email address.
///
/// Everything after the first `@`, lowercased and trimmed.
pub fn email_domain(email: &str) -> Result<String, ResolveError> {
    let (_, domain) = email.split_once('@').ok_or(ResolveError::MalformedInput)?;
    Ok(domain.to_lowercase().trim().to_string())
}

/// Maps email addresses to institutions using an immutable [`DomainTable`]
#[derive(Debug, Clone)]
pub struct DomainResolver {
    table: DomainTable,
}

impl DomainResolver {
    pub fn new(table: DomainTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &DomainTable {
        &self.table
    }

    /// Resolve an email address; `Ok(None)` means no match.
    pub fn resolve(&self, email: &str) -> Result<Option<Resolution<'_>>, ResolveError> {
        let domain = email_domain(email)?;
        Ok(self.resolve_domain(&domain))
    }

    /// Resolve an already normalized domain
    pub fn resolve_domain(&self, domain: &str) -> Option<Resolution<'_>> {
        self.match_exact(domain)
            .or_else(|| self.match_label_suffix(domain))
            .or_else(|| self.match_dot_suffix(domain))
    }

    fn match_exact(&self, domain: &str) -> Option<Resolution<'_>> {
        self.table.get(domain).map(|entry| Resolution {
            school: &entry.school,
            matched_domain: &entry.domain,
            strategy: MatchStrategy::Exact,
        })
    }

    /// Longest suffix first; never looks at a single-label remainder.
    fn match_label_suffix(&self, domain: &str) -> Option<Resolution<'_>> {
        let labels: Vec<&str> = domain.split('.').collect();

        (0..labels.len().saturating_sub(1)).find_map(|start| {
            let candidate = labels[start..].join(".");
            self.table.get(&candidate).map(|entry| Resolution {
                school: &entry.school,
                matched_domain: &entry.domain,
                strategy: MatchStrategy::LabelSuffix,
            })
        })
    }

    fn match_dot_suffix(&self, domain: &str) -> Option<Resolution<'_>> {
        self.table.iter().find_map(|entry| {
            let is_subdomain = domain
                .strip_suffix(entry.domain.as_str())
                .is_some_and(|head| head.ends_with('.'));

            is_subdomain.then(|| Resolution {
                school: &entry.school,
                matched_domain: &entry.domain,
                strategy: MatchStrategy::DotSuffix,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> DomainResolver {
        DomainResolver::new(DomainTable::ivy_league().unwrap())
    }

    fn school(email: &str) -> Option<String> {
        resolver()
            .resolve(email)
            .unwrap()
            .map(|r| r.school.to_string())
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("Student@Yale.EDU ").unwrap(), "yale.edu");
        assert_eq!(email_domain("a@b@c.edu").unwrap(), "b@c.edu");
        assert_eq!(email_domain("no-at-sign"), Err(ResolveError::MalformedInput));
    }

    #[test]
    fn test_every_table_key_matches_exactly() {
        let resolver = resolver();
        for entry in resolver.table().iter() {
            let email = format!("someone@{}", entry.domain);
            let resolution = resolver.resolve(&email).unwrap().unwrap();
            assert_eq!(resolution.school, entry.school);
            assert_eq!(resolution.strategy, MatchStrategy::Exact);
        }
    }

    #[test]
    fn test_subdomain_matches_by_label_suffix() {
        let resolver = resolver();
        let resolution = resolver.resolve("student@cs.princeton.edu").unwrap().unwrap();
        assert_eq!(resolution.school, "Princeton University");
        assert_eq!(resolution.matched_domain, "princeton.edu");
        assert_eq!(resolution.strategy, MatchStrategy::LabelSuffix);
    }

    #[test]
    fn test_label_suffix_prefers_longest_suffix() {
        let table = DomainTable::new([
            ("harvard.edu", "Harvard University"),
            ("college.harvard.edu", "Harvard College"),
        ])
        .unwrap();
        let resolver = DomainResolver::new(table);

        let resolution = resolver.resolve("x@dorm.college.harvard.edu").unwrap().unwrap();
        assert_eq!(resolution.matched_domain, "college.harvard.edu");
        assert_eq!(resolution.school, "Harvard College");
    }

    #[test]
    fn test_label_suffix_ignores_single_label() {
        let table = DomainTable::new([("edu", "Top Level")]).unwrap();
        let resolver = DomainResolver::new(table);

        assert!(resolver.match_label_suffix("yale.edu").is_none());
        // The dot-suffix scan is not bound to label counts.
        let resolution = resolver.resolve("a@yale.edu").unwrap().unwrap();
        assert_eq!(resolution.strategy, MatchStrategy::DotSuffix);
    }

    #[test]
    fn test_dot_suffix_requires_boundary() {
        let resolver = resolver();
        assert!(resolver.match_dot_suffix("evilharvard.edu").is_none());
        assert!(resolver.match_label_suffix("evilharvard.edu").is_none());
        assert_eq!(school("foo@evilharvard.edu"), None);
    }

    #[test]
    fn test_dot_suffix_follows_table_order() {
        let resolver = resolver();
        let resolution = resolver.match_dot_suffix("x.wharton.upenn.edu").unwrap();
        assert_eq!(resolution.matched_domain, "upenn.edu");
    }

    #[test]
    fn test_strategies_agree_on_subdomains() {
        let resolver = resolver();
        for domain in ["cs.princeton.edu", "a.b.yale.edu", "mail.barnard.edu"] {
            let by_label = resolver.match_label_suffix(domain).unwrap();
            let by_dot = resolver.match_dot_suffix(domain).unwrap();
            assert_eq!(by_label.school, by_dot.school);
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(school("a@mit.edu"), None);
        assert_eq!(school("a@edu"), None);
        assert_eq!(school("a@"), None);
        assert_eq!(school("a@harvard.edu.evil.com"), None);
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(school("A@CS.Cornell.Edu").as_deref(), Some("Cornell University"));
        assert_eq!(school("a@ brown.edu ").as_deref(), Some("Brown University"));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(resolver().resolve("nobody"), Err(ResolveError::MalformedInput));
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(MatchStrategy::Exact.to_string(), "exact");
        assert_eq!(MatchStrategy::LabelSuffix.to_string(), "label_suffix");
        assert_eq!(MatchStrategy::DotSuffix.to_string(), "dot_suffix");
    }
}
