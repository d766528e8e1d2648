use std::borrow::Borrow;

use serde::Serialize;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Recipient address as handed to the gateway.
///
/// Invariant: non-empty after trimming. The value is otherwise opaque: no phone-number
/// parsing or normalization happens here, the gateway validates it on submission.
pub struct Recipient(String);

impl Recipient {
    /// Field label reported when a recipient is empty.
    pub const FIELD: &'static str = "recipient";

    /// Create a validated (non-empty) recipient.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Recipient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Keyed lookups by `&str` rely on `Ord` and `Hash` matching those of the inner `String`.
impl Borrow<str> for Recipient {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Recipient {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Recipient {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Window, in whole minutes, during which the gateway keeps attempting delivery.
///
/// Invariant: `5..=2880`.
pub struct ValidityPeriod(u16);

impl ValidityPeriod {
    /// Minimum allowed validity period in minutes.
    pub const MIN: u16 = 5;
    /// Maximum allowed validity period in minutes (two days).
    pub const MAX: u16 = 2880;

    /// Create a validated validity period from a number of minutes.
    pub fn new(minutes: i64) -> Result<Self, ValidationError> {
        match u16::try_from(minutes) {
            Ok(value) if (Self::MIN..=Self::MAX).contains(&value) => Ok(Self(value)),
            _ => Err(ValidationError::InvalidValidityPeriod {
                min: Self::MIN,
                max: Self::MAX,
                actual: minutes,
            }),
        }
    }

    /// Create a validity period from a duration, counting whole minutes only.
    pub fn from_duration(duration: time::Duration) -> Result<Self, ValidationError> {
        Self::new(duration.whole_minutes())
    }

    /// Number of minutes.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// The period as a [`time::Duration`].
    pub fn as_duration(self) -> time::Duration {
        time::Duration::minutes(i64::from(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_trims_and_exposes_raw() {
        let raw = Recipient::new(" +391111111111 ").unwrap();
        assert_eq!(raw.raw(), "+391111111111");
        assert_eq!(raw, "+391111111111");
        assert!(Recipient::new("").is_err());
        assert!(matches!(
            Recipient::new("   "),
            Err(ValidationError::Empty {
                field: Recipient::FIELD
            })
        ));
    }

    #[test]
    fn recipient_is_kept_verbatim_without_normalization() {
        for input in ["+39 347 123 4567", "3471234567", "not-a-number", "ACME-list"] {
            let recipient = Recipient::new(input).unwrap();
            assert_eq!(recipient.raw(), input);
        }
        assert_ne!(
            Recipient::new("+39 347 123 4567").unwrap(),
            Recipient::new("+393471234567").unwrap()
        );
    }

    #[test]
    fn validity_period_enforces_range() {
        assert!(ValidityPeriod::new(i64::from(ValidityPeriod::MIN)).is_ok());
        assert!(ValidityPeriod::new(i64::from(ValidityPeriod::MAX)).is_ok());
        assert!(ValidityPeriod::new(4).is_err());
        assert!(ValidityPeriod::new(2881).is_err());
        assert!(ValidityPeriod::new(-60).is_err());

        let err = ValidityPeriod::new(0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidValidityPeriod {
                min: 5,
                max: 2880,
                actual: 0
            }
        );
    }

    #[test]
    fn validity_period_counts_whole_minutes_of_a_duration() {
        let period = ValidityPeriod::from_duration(time::Duration::hours(1)).unwrap();
        assert_eq!(period.minutes(), 60);
        assert_eq!(period.as_duration(), time::Duration::minutes(60));

        let period = ValidityPeriod::from_duration(time::Duration::seconds(5 * 60 + 59)).unwrap();
        assert_eq!(period.minutes(), 5);

        assert!(ValidityPeriod::from_duration(time::Duration::seconds(299)).is_err());
    }
}
