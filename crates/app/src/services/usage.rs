use serde::Serialize;

use console_core::{DailySnapshot, Period};
use rollup::{clip_to_period, fill_missing_dates, rollup_account_usage};

use crate::error::Result;
use crate::services::{SharedConfig, SharedFetcher};

/// Rolled-up storage usage for the configured account, over the usage
/// service's default reporting period.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UsageReport {
    pub total: u64,
    pub daily: Vec<DailySnapshot>,
}

#[derive(Clone)]
pub struct UsageService {
    config: SharedConfig,
    fetcher: SharedFetcher,
}

impl UsageService {
    pub(super) fn new(config: SharedConfig, fetcher: SharedFetcher) -> Self {
        Self { config, fetcher }
    }

    /// Fetch and roll up. An absent payload is an empty account, not an
    /// error.
    pub fn report(&self) -> Result<UsageReport> {
        let Some(usage) = self.fetcher.account_usage(&self.config.account)? else {
            return Ok(UsageReport::default());
        };
        let daily = rollup_account_usage(&usage);
        Ok(UsageReport {
            total: usage.total,
            daily,
        })
    }

    /// Daily series windowed to the period: sparse by default, densified
    /// over the full window when `fill` is set. An invalid period yields
    /// an empty series without fetching.
    pub fn daily(&self, period: &Period, fill: bool, fill_zero: bool) -> Result<Vec<DailySnapshot>> {
        if !period.is_valid() {
            return Ok(Vec::new());
        }
        let report = self.report()?;
        if fill {
            Ok(fill_missing_dates(
                &report.daily,
                period.first_day(),
                period.last_day(),
                fill_zero,
            ))
        } else {
            Ok(clip_to_period(&report.daily, period))
        }
    }
}
