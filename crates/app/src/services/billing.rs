use serde::Serialize;

use console_core::{PricingRates, Scaled, compute_invoice, scale_bytes};
use rollup::{rollup_account_usage, storage_at_period_end};

use crate::error::Result;
use crate::services::{SharedConfig, SharedFetcher};

/// Everything the invoice table and metrics cards need for one period:
/// byte quantities, TiB conversions, USD amounts, the unit prices that
/// produced them, and auto-scaled display pairs.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceReport {
    pub period_valid: bool,
    pub storage_bytes: u64,
    pub egress_bytes: u64,
    pub storage_tib: f64,
    pub egress_tib: f64,
    pub storage_amount_usd: f64,
    pub egress_amount_usd: f64,
    pub total_usd: f64,
    pub storage_usd_per_tib_month: f64,
    pub egress_usd_per_tib: f64,
    pub storage_display: Scaled,
    pub egress_display: Scaled,
}

impl InvoiceReport {
    /// The zeroed report served for an inverted period. `period_valid`
    /// tells the UI to show guidance instead of numbers.
    fn no_data(rates: &PricingRates) -> Self {
        Self {
            period_valid: false,
            storage_bytes: 0,
            egress_bytes: 0,
            storage_tib: 0.0,
            egress_tib: 0.0,
            storage_amount_usd: 0.0,
            egress_amount_usd: 0.0,
            total_usd: 0.0,
            storage_usd_per_tib_month: rates.storage_usd_per_tib_month,
            egress_usd_per_tib: rates.egress_usd_per_tib,
            storage_display: scale_bytes(0),
            egress_display: scale_bytes(0),
        }
    }
}

#[derive(Clone)]
pub struct BillingService {
    config: SharedConfig,
    fetcher: SharedFetcher,
}

impl BillingService {
    pub(super) fn new(config: SharedConfig, fetcher: SharedFetcher) -> Self {
        Self { config, fetcher }
    }

    /// Storage is billed at its period-end stock (last snapshot in the
    /// window, else carried forward, else the reported total when there
    /// is no series at all); egress at the service's period total.
    pub fn invoice(&self, period: &console_core::Period) -> Result<InvoiceReport> {
        let rates = self.config.rates;
        if !period.is_valid() {
            return Ok(InvoiceReport::no_data(&rates));
        }

        let usage = self.fetcher.account_usage(&self.config.account)?;
        let (daily, fallback_total) = match &usage {
            Some(usage) => (rollup_account_usage(usage), usage.total),
            None => (Vec::new(), 0),
        };
        let storage_bytes = storage_at_period_end(&daily, period, fallback_total);

        let egress_bytes = self
            .fetcher
            .account_egress(&self.config.account, Some(period))?
            .map(|egress| egress.total)
            .unwrap_or(0);

        let invoice = compute_invoice(storage_bytes, egress_bytes, &rates);
        Ok(InvoiceReport {
            period_valid: true,
            storage_bytes,
            egress_bytes,
            storage_tib: invoice.storage_tib,
            egress_tib: invoice.egress_tib,
            storage_amount_usd: invoice.storage_amount,
            egress_amount_usd: invoice.egress_amount,
            total_usd: invoice.total,
            storage_usd_per_tib_month: rates.storage_usd_per_tib_month,
            egress_usd_per_tib: rates.egress_usd_per_tib,
            storage_display: scale_bytes(storage_bytes),
            egress_display: scale_bytes(egress_bytes),
        })
    }
}
