use std::sync::Arc;

use capability_client::CapabilityFetcher;
use console_core::PricingRates;

use crate::services::AppServices;

/// Deployment-time settings shared by every service: the account the
/// console is scoped to and the injected USD rates.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub account: String,
    pub rates: PricingRates,
}

/// Application state shared by frontend backends (HTTP API, CLI).
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: AppConfig, fetcher: Arc<dyn CapabilityFetcher>) -> Self {
        let services = AppServices::new(&config, fetcher);
        Self { config, services }
    }
}
