use serde::{Deserialize, Serialize};

use console_core::PricingRates;

use crate::error::{AppError, Result};

pub const STORAGE_PRICE_ENV: &str = "STORAGE_USD_PER_TIB";
pub const EGRESS_PRICE_ENV: &str = "EGRESS_USD_PER_TIB";

/// Period selection as it arrives from a request: a named range, explicit
/// bounds, or nothing (defaults to the last 30 days).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PeriodParams {
    pub range: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Deployment defaults for the USD rates.
pub fn default_rates() -> PricingRates {
    PricingRates {
        storage_usd_per_tib_month: 5.99,
        egress_usd_per_tib: 10.0,
    }
}

/// Resolve pricing from the environment, falling back to `defaults` for
/// unset variables. A price that fails to parse, is non-finite, or is
/// negative aborts startup; NaN must never reach the invoice calculator.
pub fn rates_from_env(defaults: PricingRates) -> Result<PricingRates> {
    Ok(PricingRates {
        storage_usd_per_tib_month: parse_price(
            STORAGE_PRICE_ENV,
            std::env::var(STORAGE_PRICE_ENV).ok().as_deref(),
            defaults.storage_usd_per_tib_month,
        )?,
        egress_usd_per_tib: parse_price(
            EGRESS_PRICE_ENV,
            std::env::var(EGRESS_PRICE_ENV).ok().as_deref(),
            defaults.egress_usd_per_tib,
        )?,
    })
}

fn parse_price(name: &str, raw: Option<&str>, default: f64) -> Result<f64> {
    let value = match raw {
        Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
            AppError::InvalidInput(format!("invalid {}: {:?} is not a number", name, raw))
        })?,
        None => default,
    };
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "invalid {}: must be a finite non-negative number",
            name
        )));
    }
    Ok(value)
}
