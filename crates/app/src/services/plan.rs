use serde::Serialize;

use crate::error::Result;
use crate::services::{SharedConfig, SharedFetcher};

/// Capacity numbers behind the dashboard's capacity bar. `percent_used`
/// is `None` when the plan reserves no fixed capacity (limit 0 means
/// unlimited).
#[derive(Debug, Clone, Serialize)]
pub struct CapacityReport {
    pub reserved: u64,
    pub used: u64,
    pub remaining: u64,
    pub percent_used: Option<f64>,
}

#[derive(Clone)]
pub struct PlanService {
    config: SharedConfig,
    fetcher: SharedFetcher,
}

impl PlanService {
    pub(super) fn new(config: SharedConfig, fetcher: SharedFetcher) -> Self {
        Self { config, fetcher }
    }

    pub fn capacity(&self) -> Result<CapacityReport> {
        let reserved = self
            .fetcher
            .plan(&self.config.account)?
            .map(|plan| plan.limit)
            .unwrap_or(0);
        let used = self
            .fetcher
            .account_usage(&self.config.account)?
            .map(|usage| usage.total)
            .unwrap_or(0);
        let percent_used = if reserved == 0 {
            None
        } else {
            Some((used as f64 / reserved as f64) * 100.0)
        };
        Ok(CapacityReport {
            reserved,
            used,
            remaining: reserved.saturating_sub(used),
            percent_used,
        })
    }
}
