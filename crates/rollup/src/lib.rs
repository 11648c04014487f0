mod daily;
mod window;

pub use daily::{daily_deltas, event_day, rollup_account_usage};
pub use window::{clip_to_period, egress_daily, fill_missing_dates, storage_at_period_end};
