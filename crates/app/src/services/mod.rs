mod billing;
mod egress;
mod plan;
mod usage;

use std::sync::Arc;

use capability_client::CapabilityFetcher;

use crate::app::AppConfig;

pub use billing::{BillingService, InvoiceReport};
pub use egress::{EgressReport, EgressService};
pub use plan::{CapacityReport, PlanService};
pub use usage::{UsageReport, UsageService};

type SharedConfig = Arc<AppConfig>;
type SharedFetcher = Arc<dyn CapabilityFetcher>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub usage: UsageService,
    pub egress: EgressService,
    pub plan: PlanService,
    pub billing: BillingService,
}

impl AppServices {
    pub fn new(config: &AppConfig, fetcher: SharedFetcher) -> Self {
        let shared = Arc::new(config.clone());
        Self {
            usage: UsageService::new(shared.clone(), fetcher.clone()),
            egress: EgressService::new(shared.clone(), fetcher.clone()),
            plan: PlanService::new(shared.clone(), fetcher.clone()),
            billing: BillingService::new(shared, fetcher),
        }
    }
}
