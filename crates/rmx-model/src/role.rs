use std::fmt;

use serde::{Deserialize, Serialize};

/// The three semantic roles a summary-table column can play when assembling
/// a migration matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnRole {
    /// The rating a position held at the start of the observation window.
    StartState,
    /// The rating the position migrated to by the end of the window.
    EndState,
    /// The numeric amount that moved between the two ratings.
    Metric,
}

impl ColumnRole {
    /// Returns the role name as used in diagnostics and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::StartState => "start-state",
            ColumnRole::EndState => "end-state",
            ColumnRole::Metric => "metric",
        }
    }

    /// Human-readable description of the selection criteria for this role.
    ///
    /// Used verbatim in "not found" errors so the caller can see what the
    /// resolver was looking for.
    pub fn criteria(&self) -> &'static str {
        match self {
            ColumnRole::StartState => "a categorical column whose name contains \"start\"",
            ColumnRole::EndState => "a categorical column whose name contains \"end\"",
            ColumnRole::Metric => "a numeric column",
        }
    }

    /// The name substring a candidate column must contain, if any.
    ///
    /// Matching is case-sensitive; the metric role has no name filter.
    pub fn name_substring(&self) -> Option<&'static str> {
        match self {
            ColumnRole::StartState => Some("start"),
            ColumnRole::EndState => Some("end"),
            ColumnRole::Metric => None,
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The resolved mapping of the three required roles to concrete column names.
///
/// Once resolution succeeds, each role maps to exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBindings {
    /// Column holding the starting rating of each transition.
    pub start: String,
    /// Column holding the ending rating of each transition.
    pub end: String,
    /// Column holding the aggregated metric amount for each transition.
    pub metric: String,
}

impl RoleBindings {
    /// Return the column bound to the given role.
    pub fn column(&self, role: ColumnRole) -> &str {
        match role {
            ColumnRole::StartState => &self.start,
            ColumnRole::EndState => &self.end,
            ColumnRole::Metric => &self.metric,
        }
    }
}
