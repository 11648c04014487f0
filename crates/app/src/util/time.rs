use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::config::PeriodParams;
use crate::error::{AppError, Result};
use console_core::Period;

/// Resolve request parameters into a concrete UTC period.
///
/// Explicit bounds accept `YYYY-MM-DD` (midnight UTC) or RFC3339 and take
/// precedence over a named range; an unset bound defaults to the matching
/// edge of the last-30-days window. Malformed values are errors, but an
/// inverted range is not: it resolves to a period whose `is_valid()` is
/// false, which downstream treats as "no data".
pub fn resolve_period(params: &PeriodParams) -> Result<Period> {
    resolve_period_at(params, Utc::now())
}

pub fn resolve_period_at(params: &PeriodParams, now: DateTime<Utc>) -> Result<Period> {
    if params.from.is_some() || params.to.is_some() {
        let from = match params.from.as_deref() {
            Some(value) => parse_bound(value)?,
            None => now - Duration::days(30),
        };
        let to = match params.to.as_deref() {
            Some(value) => parse_bound(value)?,
            None => now,
        };
        return Ok(Period::new(from, to));
    }

    match params.range.as_deref().unwrap_or("last30days") {
        "last30days" => Ok(Period::new(now - Duration::days(30), now)),
        "thismonth" => Ok(Period::new(month_start(now.year(), now.month())?, now)),
        "lastmonth" => {
            let this_month = month_start(now.year(), now.month())?;
            let (year, month) = if now.month() == 1 {
                (now.year() - 1, 12)
            } else {
                (now.year(), now.month() - 1)
            };
            Ok(Period::new(month_start(year, month)?, this_month))
        }
        value => Err(AppError::InvalidInput(format!(
            "unsupported range {}",
            value
        ))),
    }
}

fn parse_bound(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| AppError::InvalidInput(format!("invalid date {}: {}", value, err)))?;
    Ok(day.and_time(NaiveTime::MIN).and_utc())
}

fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::InvalidInput("invalid calendar date".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().expect("utc")
    }

    #[test]
    fn default_is_last_30_days() {
        let now = utc(2024, 3, 15, 12);
        let period = resolve_period_at(&PeriodParams::default(), now).expect("period");
        assert_eq!(period.to, now);
        assert_eq!(period.from, now - Duration::days(30));
        assert!(period.is_valid());
    }

    #[test]
    fn this_month_starts_at_first_of_month() {
        let now = utc(2024, 3, 15, 12);
        let params = PeriodParams {
            range: Some("thismonth".to_string()),
            ..Default::default()
        };
        let period = resolve_period_at(&params, now).expect("period");
        assert_eq!(period.from, utc(2024, 3, 1, 0));
        assert_eq!(period.to, now);
    }

    #[test]
    fn last_month_is_a_half_open_month() {
        let now = utc(2024, 3, 15, 12);
        let params = PeriodParams {
            range: Some("lastmonth".to_string()),
            ..Default::default()
        };
        let period = resolve_period_at(&params, now).expect("period");
        assert_eq!(period.from, utc(2024, 2, 1, 0));
        assert_eq!(period.to, utc(2024, 3, 1, 0));
    }

    #[test]
    fn last_month_wraps_the_year_boundary() {
        let now = utc(2024, 1, 10, 0);
        let params = PeriodParams {
            range: Some("lastmonth".to_string()),
            ..Default::default()
        };
        let period = resolve_period_at(&params, now).expect("period");
        assert_eq!(period.from, utc(2023, 12, 1, 0));
        assert_eq!(period.to, utc(2024, 1, 1, 0));
    }

    #[test]
    fn explicit_day_bounds_parse_as_utc_midnight() {
        let params = PeriodParams {
            range: None,
            from: Some("2024-03-01".to_string()),
            to: Some("2024-03-31".to_string()),
        };
        let period = resolve_period_at(&params, utc(2024, 4, 2, 0)).expect("period");
        assert_eq!(period.from, utc(2024, 3, 1, 0));
        assert_eq!(period.to, utc(2024, 3, 31, 0));
    }

    #[test]
    fn rfc3339_bounds_normalize_to_utc() {
        let params = PeriodParams {
            range: None,
            from: Some("2024-03-01T05:00:00-05:00".to_string()),
            to: None,
        };
        let now = utc(2024, 3, 20, 0);
        let period = resolve_period_at(&params, now).expect("period");
        assert_eq!(period.from, utc(2024, 3, 1, 10));
        assert_eq!(period.to, now);
    }

    #[test]
    fn inverted_bounds_resolve_but_are_invalid() {
        let params = PeriodParams {
            range: None,
            from: Some("2024-03-31".to_string()),
            to: Some("2024-03-01".to_string()),
        };
        let period = resolve_period_at(&params, utc(2024, 4, 2, 0)).expect("period");
        assert!(!period.is_valid());
    }

    #[test]
    fn malformed_date_is_invalid_input() {
        let params = PeriodParams {
            range: None,
            from: Some("03/01/2024".to_string()),
            to: None,
        };
        assert!(resolve_period_at(&params, utc(2024, 4, 2, 0)).is_err());
    }

    #[test]
    fn unknown_range_is_invalid_input() {
        let params = PeriodParams {
            range: Some("fortnight".to_string()),
            ..Default::default()
        };
        assert!(resolve_period_at(&params, utc(2024, 4, 2, 0)).is_err());
    }
}
