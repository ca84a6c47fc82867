use chrono::{Local, NaiveDate};

/// Ambient inputs a validation call depends on.
///
/// The only one today is the calendar date used as the check-in floor for
/// bookings. Read it once per call with [`ValidationContext::now`], or pin it
/// with [`ValidationContext::on`] for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn now() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::now()
    }
}
