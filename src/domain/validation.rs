use std::fmt;

use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    InvalidDeliveryStart {
        requested: OffsetDateTime,
        now: OffsetDateTime,
    },
    InvalidValidityPeriod {
        min: u16,
        max: u16,
        actual: i64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidDeliveryStart { requested, now } => {
                write!(f, "delivery start is in the past: {requested} (now {now})")
            }
            Self::InvalidValidityPeriod { min, max, actual } => {
                write!(
                    f,
                    "validity period minutes out of range: {actual} (expected {min}..={max})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "recipient" };
        assert_eq!(err.to_string(), "recipient must not be empty");

        let err = ValidationError::InvalidValidityPeriod {
            min: 5,
            max: 2880,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "validity period minutes out of range: 4 (expected 5..=2880)"
        );

        let err = ValidationError::InvalidDeliveryStart {
            requested: datetime!(2024-01-01 0:00 UTC),
            now: datetime!(2024-01-02 0:00 UTC),
        };
        assert!(err.to_string().starts_with("delivery start is in the past: "));
    }
}
