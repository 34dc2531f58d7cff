use std::fmt;

/// Cache tag. Queries provide tags, mutations invalidate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Admin,
    Roles,
    ContentLibrary,
    Categories,
    BlockedKeywords,
    LegalDocs,
    VettingLogs,
    Cohorts,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
