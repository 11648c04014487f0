use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded storage change on a provider. `delta` is signed bytes;
/// deletions are negative. `receipt_at` is the RFC3339 timestamp exactly
/// as the usage service reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub cause: String,
    pub delta: i64,
    #[serde(rename = "receiptAt")]
    pub receipt_at: String,
}

/// Query window as reported inside a usage payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadPeriod {
    pub from: String,
    pub to: String,
}

/// Stored size at the start and end of the covered period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub initial: u64,
    #[serde(rename = "final")]
    pub r#final: u64,
}

/// Usage for one (space, provider) pair within the service's query period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderUsage {
    pub space: String,
    pub provider: String,
    pub period: PayloadPeriod,
    pub size: SizeRange,
    pub events: Vec<UsageEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceUsage {
    pub total: u64,
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderUsage>,
}

/// Root payload from `account/usage/get`, keyed by space DID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUsage {
    pub total: u64,
    #[serde(default)]
    pub spaces: BTreeMap<String, SpaceUsage>,
}

/// One day of egress for a space, as reported by `account/egress/get`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: String,
    pub egress: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceEgress {
    pub total: u64,
    #[serde(default, rename = "dailyStats")]
    pub daily_stats: Vec<DailyStat>,
}

/// Root payload from `account/egress/get`, keyed by space DID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountEgress {
    pub total: u64,
    #[serde(default)]
    pub spaces: BTreeMap<String, SpaceEgress>,
}

/// Payload from `plan/get`. A limit of 0 means unlimited capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub limit: u64,
}

/// Cumulative account storage as of end of `date`. Produced by the roll-up;
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub bytes: u64,
}

/// Signed day-over-day change of a cumulative snapshot series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDelta {
    pub date: NaiveDate,
    pub delta: i64,
}
