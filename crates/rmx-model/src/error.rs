use thiserror::Error;

use crate::role::ColumnRole;

/// Why role resolution could not settle on a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbiguityKind {
    /// No column in the table satisfied the role's selection criteria.
    NotFound,
    /// More than one column satisfied the criteria.
    MultipleMatches,
}

/// Raised when a column role cannot be resolved to exactly one column.
///
/// Resolution is deterministic: the same table and arguments fail identically
/// on retry, so this error is never worth retrying without a schema or
/// argument change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmbiguousColumnError {
    #[error("no column found for the {role} role: expected {criteria}")]
    NotFound {
        role: ColumnRole,
        criteria: &'static str,
    },
    #[error("multiple columns qualify for the {role} role: {}", .candidates.join(", "))]
    MultipleMatches {
        role: ColumnRole,
        candidates: Vec<String>,
    },
}

impl AmbiguousColumnError {
    /// Build a "not found" failure for the given role, carrying its criteria.
    pub fn not_found(role: ColumnRole) -> Self {
        AmbiguousColumnError::NotFound {
            role,
            criteria: role.criteria(),
        }
    }

    /// Build a "multiple matches" failure naming every qualifying column.
    pub fn multiple_matches(role: ColumnRole, candidates: Vec<String>) -> Self {
        AmbiguousColumnError::MultipleMatches { role, candidates }
    }

    /// The role that failed to resolve.
    pub fn role(&self) -> ColumnRole {
        match self {
            AmbiguousColumnError::NotFound { role, .. }
            | AmbiguousColumnError::MultipleMatches { role, .. } => *role,
        }
    }

    /// The failure kind, independent of the role.
    pub fn kind(&self) -> AmbiguityKind {
        match self {
            AmbiguousColumnError::NotFound { .. } => AmbiguityKind::NotFound,
            AmbiguousColumnError::MultipleMatches { .. } => AmbiguityKind::MultipleMatches,
        }
    }
}

/// Model-level errors.
#[derive(Debug, Error)]
pub enum RmxError {
    #[error(transparent)]
    AmbiguousColumn(#[from] AmbiguousColumnError),
    /// A matrix was constructed with a cell count that does not match its axes.
    #[error("matrix of {rows} x {cols} labels requires {expected} cells, got {actual}")]
    CellCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, RmxError>;
