use serde::Serialize;

use console_core::{DailySnapshot, Period};
use rollup::egress_daily;

use crate::error::Result;
use crate::services::{SharedConfig, SharedFetcher};

/// Account-wide egress for a period: the service's total plus the merged
/// per-day series across all spaces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EgressReport {
    pub total: u64,
    pub daily: Vec<DailySnapshot>,
}

#[derive(Clone)]
pub struct EgressService {
    config: SharedConfig,
    fetcher: SharedFetcher,
}

impl EgressService {
    pub(super) fn new(config: SharedConfig, fetcher: SharedFetcher) -> Self {
        Self { config, fetcher }
    }

    /// An invalid period short-circuits to an empty report without
    /// invoking the capability.
    pub fn report(&self, period: &Period) -> Result<EgressReport> {
        if !period.is_valid() {
            return Ok(EgressReport::default());
        }
        let Some(egress) = self
            .fetcher
            .account_egress(&self.config.account, Some(period))?
        else {
            return Ok(EgressReport::default());
        };
        Ok(EgressReport {
            total: egress.total,
            daily: egress_daily(&egress),
        })
    }
}
