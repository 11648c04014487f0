use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use console_core::{AccountEgress, AccountUsage, Period, Plan};

use crate::error::Result;
use crate::fetcher::CapabilityFetcher;
use crate::receipt::Receipt;

const USAGE_FILE: &str = "usage.json";
const EGRESS_FILE: &str = "egress.json";
const PLAN_FILE: &str = "plan.json";

/// Adapter that reads capability receipts captured as JSON files in a
/// directory: `usage.json`, `egress.json`, `plan.json`. A missing file is
/// an absent payload, not an error. Fixtures are pre-scoped, so the egress
/// period argument is ignored.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn read_receipt<T: DeserializeOwned>(&self, file_name: &str) -> Result<Option<T>> {
        let path = self.dir.join(file_name);
        if !path.exists() {
            return Ok(None);
        }
        let file = fs::File::open(&path)?;
        let receipt: Receipt<T> = serde_json::from_reader(BufReader::new(file))?;
        receipt.into_result()
    }
}

impl CapabilityFetcher for FixtureStore {
    fn account_usage(&self, _account: &str) -> Result<Option<AccountUsage>> {
        self.read_receipt(USAGE_FILE)
    }

    fn account_egress(
        &self,
        _account: &str,
        _period: Option<&Period>,
    ) -> Result<Option<AccountEgress>> {
        self.read_receipt(EGRESS_FILE)
    }

    fn plan(&self, _account: &str) -> Result<Option<Plan>> {
        self.read_receipt(PLAN_FILE)
    }
}
