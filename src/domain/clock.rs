use time::OffsetDateTime;

/// Source of the current instant used for delivery-start validation.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
/// Wall clock in UTC.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Clock frozen at a single instant.
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    /// Freeze the clock at `now`.
    pub fn new(now: OffsetDateTime) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}
