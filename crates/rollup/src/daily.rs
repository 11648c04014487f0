use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use console_core::{AccountUsage, DailyDelta, DailySnapshot};

/// UTC calendar day of an event's receipt timestamp. `None` for
/// unparseable timestamps; callers skip those events rather than failing
/// the whole roll-up.
pub fn event_day(receipt_at: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(receipt_at)
        .ok()
        .map(|ts| ts.with_timezone(&Utc).date_naive())
}

/// Roll a sparse, event-sourced usage payload into cumulative daily
/// snapshots.
///
/// The starting size is the sum of `size.initial` across every
/// (space, provider) pair; the payload's top-level `total` is deliberately
/// not reconciled against it. Events from all spaces are grouped by UTC
/// day and their signed deltas netted, then the net deltas are accumulated
/// in date order with a floor of zero. Only days with activity are
/// emitted, so the output is sparse; no events means an empty series.
///
/// The emitted dates are strictly increasing with no duplicates.
pub fn rollup_account_usage(usage: &AccountUsage) -> Vec<DailySnapshot> {
    let mut baseline: i128 = 0;
    let mut net_by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();

    for space in usage.spaces.values() {
        for provider in space.providers.values() {
            baseline += provider.size.initial as i128;
            for event in &provider.events {
                let Some(day) = event_day(&event.receipt_at) else {
                    continue;
                };
                let net = net_by_day.entry(day).or_insert(0);
                *net = net.saturating_add(event.delta);
            }
        }
    }

    if net_by_day.is_empty() {
        return Vec::new();
    }

    let mut current = baseline;
    net_by_day
        .into_iter()
        .map(|(date, net)| {
            // Storage is never reported negative, even when deltas are
            // inconsistent with the provider baselines.
            current = (current + net as i128).max(0);
            DailySnapshot {
                date,
                bytes: current.min(u64::MAX as i128) as u64,
            }
        })
        .collect()
}

/// Day-over-day signed change of a cumulative series. The first entry
/// keeps its absolute value, later entries are the difference from the
/// previous snapshot. Changes beyond the `i64` range saturate instead of
/// wrapping.
pub fn daily_deltas(daily: &[DailySnapshot]) -> Vec<DailyDelta> {
    let mut previous: Option<u64> = None;
    daily
        .iter()
        .map(|snapshot| {
            let delta = match previous {
                Some(bytes) => clamp_delta(snapshot.bytes as i128 - bytes as i128),
                None => snapshot.bytes.min(i64::MAX as u64) as i64,
            };
            previous = Some(snapshot.bytes);
            DailyDelta {
                date: snapshot.date,
                delta,
            }
        })
        .collect()
}

fn clamp_delta(diff: i128) -> i64 {
    diff.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::{PayloadPeriod, ProviderUsage, SizeRange, SpaceUsage, UsageEvent};

    fn provider(space: &str, initial: u64, events: Vec<UsageEvent>) -> ProviderUsage {
        ProviderUsage {
            space: space.to_string(),
            provider: "did:web:provider.example".to_string(),
            period: PayloadPeriod {
                from: "2024-03-01T00:00:00Z".to_string(),
                to: "2024-03-31T00:00:00Z".to_string(),
            },
            size: SizeRange {
                initial,
                r#final: 0,
            },
            events,
        }
    }

    fn event(receipt_at: &str, delta: i64) -> UsageEvent {
        UsageEvent {
            cause: "bafy-cause".to_string(),
            delta,
            receipt_at: receipt_at.to_string(),
        }
    }

    fn usage_with(spaces: Vec<(&str, u64, Vec<ProviderUsage>)>) -> AccountUsage {
        let mut usage = AccountUsage::default();
        for (did, total, providers) in spaces {
            let mut space = SpaceUsage {
                total,
                ..Default::default()
            };
            for (index, entry) in providers.into_iter().enumerate() {
                space
                    .providers
                    .insert(format!("did:web:provider{index}.example"), entry);
            }
            usage.total += total;
            usage.spaces.insert(did.to_string(), space);
        }
        usage
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn empty_account_yields_empty_series() {
        assert!(rollup_account_usage(&AccountUsage::default()).is_empty());
    }

    #[test]
    fn providers_without_events_yield_empty_series() {
        let usage = usage_with(vec![("did:key:a", 100, vec![provider("did:key:a", 100, vec![])])]);
        assert!(rollup_account_usage(&usage).is_empty());
    }

    #[test]
    fn deltas_accumulate_from_summed_initial_sizes() {
        let usage = usage_with(vec![
            (
                "did:key:a",
                0,
                vec![provider(
                    "did:key:a",
                    1_000,
                    vec![event("2024-03-02T10:00:00Z", 500)],
                )],
            ),
            (
                "did:key:b",
                0,
                vec![provider(
                    "did:key:b",
                    2_000,
                    vec![event("2024-03-04T08:00:00Z", -700)],
                )],
            ),
        ]);

        let daily = rollup_account_usage(&usage);
        assert_eq!(
            daily,
            vec![
                DailySnapshot {
                    date: day(2024, 3, 2),
                    bytes: 3_500,
                },
                DailySnapshot {
                    date: day(2024, 3, 4),
                    bytes: 2_800,
                },
            ]
        );
    }

    #[test]
    fn same_day_events_net_into_one_snapshot() {
        let usage = usage_with(vec![(
            "did:key:a",
            0,
            vec![provider(
                "did:key:a",
                0,
                vec![
                    event("2024-03-02T01:00:00Z", 300),
                    event("2024-03-02T23:59:59Z", -100),
                    event("2024-03-02T12:00:00Z", 50),
                ],
            )],
        )]);

        let daily = rollup_account_usage(&usage);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].bytes, 250);
    }

    #[test]
    fn dates_are_strictly_increasing_across_spaces() {
        let usage = usage_with(vec![
            (
                "did:key:a",
                0,
                vec![provider(
                    "did:key:a",
                    0,
                    vec![
                        event("2024-03-05T00:00:00Z", 10),
                        event("2024-03-01T00:00:00Z", 10),
                    ],
                )],
            ),
            (
                "did:key:b",
                0,
                vec![provider(
                    "did:key:b",
                    0,
                    vec![event("2024-03-03T00:00:00Z", 10)],
                )],
            ),
        ]);

        let daily = rollup_account_usage(&usage);
        let dates: Vec<NaiveDate> = daily.iter().map(|snapshot| snapshot.date).collect();
        assert_eq!(dates, vec![day(2024, 3, 1), day(2024, 3, 3), day(2024, 3, 5)]);
    }

    #[test]
    fn cumulative_size_clamps_at_zero() {
        let usage = usage_with(vec![(
            "did:key:a",
            0,
            vec![provider(
                "did:key:a",
                100,
                vec![
                    event("2024-03-01T00:00:00Z", -500),
                    event("2024-03-02T00:00:00Z", 40),
                ],
            )],
        )]);

        let daily = rollup_account_usage(&usage);
        assert_eq!(daily[0].bytes, 0);
        assert_eq!(daily[1].bytes, 40);
    }

    #[test]
    fn unparseable_timestamps_are_skipped() {
        let usage = usage_with(vec![(
            "did:key:a",
            0,
            vec![provider(
                "did:key:a",
                0,
                vec![
                    event("not-a-timestamp", 999),
                    event("2024-03-02T00:00:00Z", 10),
                ],
            )],
        )]);

        let daily = rollup_account_usage(&usage);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].bytes, 10);
    }

    #[test]
    fn event_day_uses_utc_calendar_date() {
        // 23:30 at UTC-05:00 is already the next day in UTC.
        assert_eq!(
            event_day("2024-03-01T23:30:00-05:00"),
            Some(day(2024, 3, 2))
        );
        assert_eq!(event_day("2024-03-01T00:00:00Z"), Some(day(2024, 3, 1)));
        assert_eq!(event_day("garbage"), None);
    }

    #[test]
    fn daily_deltas_start_absolute_then_difference() {
        let daily = vec![
            DailySnapshot {
                date: day(2024, 3, 1),
                bytes: 100,
            },
            DailySnapshot {
                date: day(2024, 3, 3),
                bytes: 250,
            },
            DailySnapshot {
                date: day(2024, 3, 4),
                bytes: 200,
            },
        ];

        let deltas = daily_deltas(&daily);
        assert_eq!(
            deltas,
            vec![
                DailyDelta {
                    date: day(2024, 3, 1),
                    delta: 100,
                },
                DailyDelta {
                    date: day(2024, 3, 3),
                    delta: 150,
                },
                DailyDelta {
                    date: day(2024, 3, 4),
                    delta: -50,
                },
            ]
        );
    }

    #[test]
    fn daily_deltas_of_empty_series_is_empty() {
        assert!(daily_deltas(&[]).is_empty());
    }

    #[test]
    fn daily_deltas_saturate_instead_of_wrapping() {
        let daily = vec![
            DailySnapshot {
                date: day(2024, 3, 1),
                bytes: u64::MAX,
            },
            DailySnapshot {
                date: day(2024, 3, 2),
                bytes: 0,
            },
        ];

        let deltas = daily_deltas(&daily);
        assert_eq!(deltas[0].delta, i64::MAX);
        assert_eq!(deltas[1].delta, i64::MIN);
    }
}
