use serde::Serialize;

use console_core::{DailyDelta, DailySnapshot, Scaled};

#[derive(Serialize)]
pub struct UsageSummaryResponse {
    pub total: u64,
    pub total_display: Scaled,
    pub daily: Vec<DailySnapshot>,
}

#[derive(Serialize)]
pub struct DailySeriesResponse {
    pub period_valid: bool,
    pub daily: Vec<DailySnapshot>,
    pub deltas: Vec<DailyDelta>,
}

#[derive(Serialize)]
pub struct EgressResponse {
    pub period_valid: bool,
    pub total: u64,
    pub total_display: Scaled,
    pub daily: Vec<DailySnapshot>,
}

#[derive(Serialize)]
pub struct CapacityResponse {
    pub reserved: u64,
    pub used: u64,
    pub remaining: u64,
    pub percent_used: Option<f64>,
    pub unlimited: bool,
}
