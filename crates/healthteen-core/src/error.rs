use std::fmt;

use crate::models::Metric;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Post,
    Metric,
    Group,
    Contact,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupKind::Post => "post",
            LookupKind::Metric => "metric",
            LookupKind::Group => "group",
            LookupKind::Contact => "contact",
        };
        f.write_str(name)
    }
}

/// Errors reported to the caller of a core operation.
///
/// None of these are fatal: a rejected operation leaves all state untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("unknown {kind}: {key}")]
    NotFound { kind: LookupKind, key: String },

    #[error("no trend for {metric}: prior period average is zero")]
    DivisionUndefined { metric: Metric },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn not_found(kind: LookupKind, key: impl Into<String>) -> Self {
        CoreError::NotFound {
            kind,
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::not_found(LookupKind::Post, "42");
        assert_eq!(err.to_string(), "unknown post: 42");

        let err = CoreError::DivisionUndefined {
            metric: Metric::Sleep,
        };
        assert!(err.to_string().contains("Sleep"));

        let err = CoreError::validation("value must be zero or greater");
        assert_eq!(err.to_string(), "invalid input: value must be zero or greater");
    }
}
