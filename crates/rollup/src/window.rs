use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use console_core::{AccountEgress, DailySnapshot, Period};

/// Storage held at the end of the selected period.
///
/// Storage is a stock, not a flow: a window with no activity still holds
/// whatever was stored before it. The lookup order is therefore: latest
/// snapshot inside the window; else latest snapshot before the window
/// (carry-forward); else zero. An account with no snapshots at all falls
/// back to the service-reported total.
///
/// `daily` must be date-ordered, as the roll-up produces it.
pub fn storage_at_period_end(daily: &[DailySnapshot], period: &Period, fallback_total: u64) -> u64 {
    if daily.is_empty() {
        return fallback_total;
    }

    let from = period.first_day();

    if let Some(snapshot) = daily.iter().rev().find(|s| period.contains_day(s.date)) {
        return snapshot.bytes;
    }
    if let Some(snapshot) = daily.iter().rev().find(|s| s.date < from) {
        return snapshot.bytes;
    }
    0
}

/// Subsequence of snapshots whose day key falls inside the period.
pub fn clip_to_period(daily: &[DailySnapshot], period: &Period) -> Vec<DailySnapshot> {
    daily
        .iter()
        .filter(|snapshot| period.contains_day(snapshot.date))
        .copied()
        .collect()
}

/// Densify a sparse series over the inclusive day range, for charting.
///
/// Known days pass through and update the carried value; gaps emit zero
/// when `fill_zero`, otherwise the last known value. The carried value
/// starts at zero before the first known day. An empty input stays empty.
pub fn fill_missing_dates(
    daily: &[DailySnapshot],
    from_day: NaiveDate,
    to_day: NaiveDate,
    fill_zero: bool,
) -> Vec<DailySnapshot> {
    if daily.is_empty() {
        return Vec::new();
    }

    let known: BTreeMap<NaiveDate, u64> = daily
        .iter()
        .map(|snapshot| (snapshot.date, snapshot.bytes))
        .collect();

    let mut filled = Vec::new();
    let mut last_value = 0u64;
    let mut date = from_day;
    while date <= to_day {
        match known.get(&date) {
            Some(&bytes) => {
                last_value = bytes;
                filled.push(DailySnapshot { date, bytes });
            }
            None => filled.push(DailySnapshot {
                date,
                bytes: if fill_zero { 0 } else { last_value },
            }),
        }
        let Some(next) = date.succ_opt() else { break };
        date = next;
    }
    filled
}

/// Merge per-space egress stats into one account-wide daily series, summing
/// egress per UTC day. Stats with unparseable dates are skipped.
pub fn egress_daily(egress: &AccountEgress) -> Vec<DailySnapshot> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for space in egress.spaces.values() {
        for stat in &space.daily_stats {
            let Some(day) = stat_day(&stat.date) else {
                continue;
            };
            let bytes = per_day.entry(day).or_insert(0);
            *bytes = bytes.saturating_add(stat.egress);
        }
    }

    per_day
        .into_iter()
        .map(|(date, bytes)| DailySnapshot { date, bytes })
        .collect()
}

/// Egress services report dates either as full RFC3339 timestamps or as
/// plain `YYYY-MM-DD` keys.
fn stat_day(value: &str) -> Option<NaiveDate> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use console_core::{DailyStat, SpaceEgress};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    fn period(from: (i32, u32, u32), to: (i32, u32, u32)) -> Period {
        Period::new(
            Utc.with_ymd_and_hms(from.0, from.1, from.2, 0, 0, 0)
                .single()
                .expect("from"),
            Utc.with_ymd_and_hms(to.0, to.1, to.2, 0, 0, 0)
                .single()
                .expect("to"),
        )
    }

    fn snapshot(y: i32, m: u32, d: u32, bytes: u64) -> DailySnapshot {
        DailySnapshot {
            date: day(y, m, d),
            bytes,
        }
    }

    #[test]
    fn empty_series_returns_fallback_total() {
        let window = period((2024, 3, 1), (2024, 3, 31));
        assert_eq!(storage_at_period_end(&[], &window, 12_345), 12_345);
    }

    #[test]
    fn last_snapshot_in_window_wins() {
        let daily = vec![
            snapshot(2024, 3, 2, 100),
            snapshot(2024, 3, 10, 400),
            snapshot(2024, 4, 2, 900),
        ];
        let window = period((2024, 3, 1), (2024, 3, 31));
        assert_eq!(storage_at_period_end(&daily, &window, 0), 400);
    }

    #[test]
    fn quiet_window_carries_forward_prior_value() {
        let daily = vec![snapshot(2024, 1, 5, 100), snapshot(2024, 2, 1, 300)];
        let window = period((2024, 3, 1), (2024, 3, 31));
        assert_eq!(storage_at_period_end(&daily, &window, 0), 300);
    }

    #[test]
    fn window_before_any_snapshot_is_zero() {
        let daily = vec![snapshot(2024, 5, 1, 100)];
        let window = period((2024, 3, 1), (2024, 3, 31));
        assert_eq!(storage_at_period_end(&daily, &window, 777), 0);
    }

    #[test]
    fn window_boundary_days_are_inclusive() {
        let daily = vec![snapshot(2024, 3, 31, 555)];
        let window = period((2024, 3, 1), (2024, 3, 31));
        assert_eq!(storage_at_period_end(&daily, &window, 0), 555);
    }

    #[test]
    fn clip_keeps_only_in_window_days() {
        let daily = vec![
            snapshot(2024, 2, 28, 1),
            snapshot(2024, 3, 1, 2),
            snapshot(2024, 3, 31, 3),
            snapshot(2024, 4, 1, 4),
        ];
        let window = period((2024, 3, 1), (2024, 3, 31));
        assert_eq!(
            clip_to_period(&daily, &window),
            vec![snapshot(2024, 3, 1, 2), snapshot(2024, 3, 31, 3)]
        );
    }

    #[test]
    fn fill_carries_forward_with_zero_before_first_known_day() {
        let daily = vec![snapshot(2024, 3, 3, 500)];
        let filled = fill_missing_dates(&daily, day(2024, 3, 1), day(2024, 3, 5), false);
        assert_eq!(
            filled,
            vec![
                snapshot(2024, 3, 1, 0),
                snapshot(2024, 3, 2, 0),
                snapshot(2024, 3, 3, 500),
                snapshot(2024, 3, 4, 500),
                snapshot(2024, 3, 5, 500),
            ]
        );
    }

    #[test]
    fn fill_zero_leaves_gaps_at_zero() {
        let daily = vec![snapshot(2024, 3, 2, 500)];
        let filled = fill_missing_dates(&daily, day(2024, 3, 1), day(2024, 3, 3), true);
        assert_eq!(
            filled,
            vec![
                snapshot(2024, 3, 1, 0),
                snapshot(2024, 3, 2, 500),
                snapshot(2024, 3, 3, 0),
            ]
        );
    }

    #[test]
    fn fill_of_empty_series_stays_empty() {
        assert!(fill_missing_dates(&[], day(2024, 3, 1), day(2024, 3, 5), false).is_empty());
    }

    #[test]
    fn egress_daily_sums_across_spaces_per_day() {
        let mut egress = AccountEgress {
            total: 600,
            ..Default::default()
        };
        egress.spaces.insert(
            "did:key:a".to_string(),
            SpaceEgress {
                total: 300,
                daily_stats: vec![
                    DailyStat {
                        date: "2024-03-01T00:00:00Z".to_string(),
                        egress: 100,
                    },
                    DailyStat {
                        date: "2024-03-02".to_string(),
                        egress: 200,
                    },
                ],
            },
        );
        egress.spaces.insert(
            "did:key:b".to_string(),
            SpaceEgress {
                total: 300,
                daily_stats: vec![
                    DailyStat {
                        date: "2024-03-01".to_string(),
                        egress: 250,
                    },
                    DailyStat {
                        date: "bogus".to_string(),
                        egress: 50,
                    },
                ],
            },
        );

        let daily = egress_daily(&egress);
        assert_eq!(
            daily,
            vec![snapshot(2024, 3, 1, 350), snapshot(2024, 3, 2, 200)]
        );
    }
}
