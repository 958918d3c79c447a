//! Institution domain rules
//!
//! The allow-list of eligible email domains and the resolver that maps an
//! email address onto an institution.

pub mod resolver;
pub mod table;

pub use resolver::{DomainResolver, MatchStrategy, Resolution, ResolveError, email_domain};
pub use table::{AllowedDomain, DomainTable, DomainTableError};
