mod invoice;
mod period;
mod types;
mod units;

pub use invoice::{Invoice, PricingRates, compute_invoice, format_usd};
pub use period::Period;
pub use types::{
    AccountEgress, AccountUsage, DailyDelta, DailySnapshot, DailyStat, PayloadPeriod, Plan,
    ProviderUsage, SizeRange, SpaceEgress, SpaceUsage, UsageEvent,
};
pub use units::{ByteUnit, Scaled, bytes_to_gib, bytes_to_tib, scale_bytes, TIB};
