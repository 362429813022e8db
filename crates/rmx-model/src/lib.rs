pub mod error;
pub mod matrix;
pub mod role;

pub use error::{AmbiguityKind, AmbiguousColumnError, Result, RmxError};
pub use matrix::TransitionMatrix;
pub use role::{ColumnRole, RoleBindings};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_serializes() {
        let matrix = TransitionMatrix::new(
            vec!["A".to_string(), "B".to_string()],
            vec!["A".to_string(), "B".to_string()],
            vec![Some(1.0), Some(2.0), None, Some(4.0)],
        )
        .expect("build matrix");
        let json = serde_json::to_string(&matrix).expect("serialize matrix");
        let round: TransitionMatrix = serde_json::from_str(&json).expect("deserialize matrix");
        assert_eq!(round.shape(), (2, 2));
        assert_eq!(round.get(1, 0), None);
        assert_eq!(round.get(1, 1), Some(4.0));
    }

    #[test]
    fn role_bindings_lookup() {
        let bindings = RoleBindings {
            start: "start_state".to_string(),
            end: "end_state".to_string(),
            metric: "metric_change".to_string(),
        };
        assert_eq!(bindings.column(ColumnRole::StartState), "start_state");
        assert_eq!(bindings.column(ColumnRole::EndState), "end_state");
        assert_eq!(bindings.column(ColumnRole::Metric), "metric_change");
    }
}
