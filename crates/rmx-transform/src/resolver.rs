//! Per-role column resolution from the table schema.
//!
//! Each role carries an explicit matching predicate: a dtype filter plus,
//! for the state roles, a name-substring filter. Resolution is strict about
//! arity: anything other than exactly one candidate is an error, so a
//! schema change that introduces a second plausible column fails loudly
//! instead of silently picking one.

use polars::prelude::{DataFrame, DataType};

use rmx_model::{AmbiguousColumnError, ColumnRole};

/// Resolves one column role against a table schema.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRoleResolver {
    role: ColumnRole,
}

impl ColumnRoleResolver {
    /// Resolver for the given role, carrying that role's predicate.
    pub fn for_role(role: ColumnRole) -> Self {
        Self { role }
    }

    /// The role this resolver matches.
    pub fn role(&self) -> ColumnRole {
        self.role
    }

    /// All columns satisfying this role's predicate, in schema order.
    pub fn candidates(&self, table: &DataFrame) -> Vec<String> {
        table
            .schema()
            .iter()
            .filter(|(name, dtype)| self.matches(name.as_str(), *dtype))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Resolve to exactly one column, or fail with the arity violation.
    pub fn resolve(&self, table: &DataFrame) -> Result<String, AmbiguousColumnError> {
        let mut candidates = self.candidates(table);
        match candidates.len() {
            1 => Ok(candidates.remove(0)),
            0 => Err(AmbiguousColumnError::not_found(self.role)),
            _ => Err(AmbiguousColumnError::multiple_matches(self.role, candidates)),
        }
    }

    /// Whether a single column satisfies this role's predicate.
    ///
    /// The name-substring match is case-sensitive: a column named
    /// `StartRating` does not qualify for the start-state role.
    pub fn matches(&self, name: &str, dtype: &DataType) -> bool {
        let dtype_ok = match self.role {
            ColumnRole::StartState | ColumnRole::EndState => is_state_dtype(dtype),
            ColumnRole::Metric => is_metric_dtype(dtype),
        };
        if !dtype_ok {
            return false;
        }
        match self.role.name_substring() {
            Some(substring) => name.contains(substring),
            None => true,
        }
    }
}

/// Categorical state columns arrive as strings after CSV ingestion.
fn is_state_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String)
}

fn is_metric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
