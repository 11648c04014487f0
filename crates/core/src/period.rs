use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A query window over account data. Only periods with `from < to` are
/// usable; an inverted period is treated downstream as "no data" rather
/// than an error.
///
/// Filtering against snapshot series happens on UTC calendar-day keys, not
/// raw instants, so a client and service that disagree on timezone cannot
/// drift the boundary days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Period {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    pub fn is_valid(&self) -> bool {
        self.from < self.to
    }

    /// First UTC calendar day covered by the window.
    pub fn first_day(&self) -> NaiveDate {
        self.from.date_naive()
    }

    /// Last UTC calendar day covered by the window (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.to.date_naive()
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        day >= self.first_day() && day <= self.last_day()
    }
}
