use serde::{Deserialize, Serialize};

use crate::units::bytes_to_tib;

/// Per-TiB USD rates, injected from deployment configuration. Storage is
/// billed per TiB-month, egress per TiB transferred.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRates {
    pub storage_usd_per_tib_month: f64,
    pub egress_usd_per_tib: f64,
}

/// Line-item and total amounts for one billing period. Amounts carry full
/// precision; rounding to cents is the display layer's concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub storage_amount: f64,
    pub egress_amount: f64,
    pub total: f64,
    pub storage_tib: f64,
    pub egress_tib: f64,
}

/// Pure rate arithmetic: `amount = bytes / 2^40 * rate`. Total over all
/// byte counts including zero.
pub fn compute_invoice(storage_bytes: u64, egress_bytes: u64, rates: &PricingRates) -> Invoice {
    let storage_tib = bytes_to_tib(storage_bytes);
    let egress_tib = bytes_to_tib(egress_bytes);
    let storage_amount = storage_tib * rates.storage_usd_per_tib_month;
    let egress_amount = egress_tib * rates.egress_usd_per_tib;
    Invoice {
        storage_amount,
        egress_amount,
        total: storage_amount + egress_amount,
        storage_tib,
        egress_tib,
    }
}

pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}
