//! Allow-list of institution email domains

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// A single allow-list entry as it appears in a domains file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AllowedDomain {
    pub domain: String,
    pub school: String,
}

/// Built-in allow-list. Several institutions have more than one domain.
const IVY_LEAGUE_DOMAINS: &[(&str, &str)] = &[
    ("harvard.edu", "Harvard University"),
    ("college.harvard.edu", "Harvard University"),
    ("gsd.harvard.edu", "Harvard University"),
    ("g.harvard.edu", "Harvard University"),
    ("fas.harvard.edu", "Harvard University"),
    ("yale.edu", "Yale University"),
    ("princeton.edu", "Princeton University"),
    ("columbia.edu", "Columbia University"),
    ("barnard.edu", "Barnard College"),
    ("upenn.edu", "University of Pennsylvania"),
    ("wharton.upenn.edu", "University of Pennsylvania"),
    ("brown.edu", "Brown University"),
    ("dartmouth.edu", "Dartmouth College"),
    ("cornell.edu", "Cornell University"),
];

/// Immutable mapping from lowercase domain to institution display name.
///
/// Iteration follows insertion order, which the dot-suffix strategy relies on.
#[derive(Debug, Clone)]
pub struct DomainTable {
    entries: Vec<AllowedDomain>,
    index: HashMap<String, usize>,
}

impl DomainTable {
    /// Build a table, normalizing keys to trimmed lowercase.
    ///
    /// A repeated key keeps its first position and takes the later school.
    pub fn new<I, D, S>(entries: I) -> Result<Self, DomainTableError>
    where
        I: IntoIterator<Item = (D, S)>,
        D: AsRef<str>,
        S: AsRef<str>,
    {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for (domain, school) in entries {
            let domain = domain.as_ref().trim().to_lowercase();
            let school = school.as_ref().trim().to_string();

            if domain.is_empty() {
                return Err(DomainTableError::EmptyDomain);
            }
            if school.is_empty() {
                return Err(DomainTableError::EmptySchool(domain));
            }

            match table.index.get(&domain) {
                Some(&position) => table.entries[position].school = school,
                None => {
                    table.index.insert(domain.clone(), table.entries.len());
                    table.entries.push(AllowedDomain { domain, school });
                }
            }
        }

        if table.entries.is_empty() {
            return Err(DomainTableError::Empty);
        }

        Ok(table)
    }

    /// The built-in Ivy League allow-list
    pub fn ivy_league() -> Result<Self, DomainTableError> {
        Self::new(IVY_LEAGUE_DOMAINS.iter().copied())
    }

    /// Load a table from a JSON array of `{"domain": ..., "school": ...}` objects
    pub fn from_json_file(path: &Path) -> Result<Self, DomainTableError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DomainTableError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let entries: Vec<AllowedDomain> = serde_json::from_str(&raw)?;
        Self::new(entries.into_iter().map(|e| (e.domain, e.school)))
    }

    /// Look up a normalized domain
    pub fn get(&self, domain: &str) -> Option<&AllowedDomain> {
        self.index.get(domain).map(|&position| &self.entries[position])
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &AllowedDomain> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Errors raised while building a domain table
#[derive(Debug, thiserror::Error)]
pub enum DomainTableError {
    #[error("Domain table must contain at least one entry")]
    Empty,

    #[error("Domain table contains an empty domain")]
    EmptyDomain,

    #[error("Domain '{0}' has an empty school name")]
    EmptySchool(String),

    #[error("Failed to read domain table {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid domain table JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
