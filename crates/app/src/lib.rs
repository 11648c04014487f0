pub mod app;
pub mod config;
pub mod error;
pub mod services;
pub mod util;

pub use app::{AppConfig, AppState};
pub use config::{PeriodParams, default_rates, rates_from_env};
pub use error::{ApiError, AppError, Result};
pub use services::{
    AppServices, BillingService, CapacityReport, EgressReport, EgressService, InvoiceReport,
    PlanService, UsageReport, UsageService,
};
pub use util::time::resolve_period;
