use console_core::{AccountEgress, AccountUsage, Period, Plan};

use crate::error::Result;

/// Boundary between the computation core and capability invocation.
///
/// Implementations own transport, signing, and retry policy. `Ok(None)`
/// means the service answered without a payload; callers must treat that
/// as empty input, never as an error.
pub trait CapabilityFetcher: Send + Sync {
    /// `account/usage/get` for the account's service-default period.
    fn account_usage(&self, account: &str) -> Result<Option<AccountUsage>>;

    /// `account/egress/get`, optionally scoped to a period.
    fn account_egress(&self, account: &str, period: Option<&Period>)
    -> Result<Option<AccountEgress>>;

    /// `plan/get` for the account's reserved capacity.
    fn plan(&self, account: &str) -> Result<Option<Plan>>;
}
