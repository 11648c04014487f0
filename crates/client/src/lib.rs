mod error;
mod fetcher;
mod fixture;
mod receipt;

pub use error::{FetchError, Result};
pub use fetcher::CapabilityFetcher;
pub use fixture::FixtureStore;
pub use receipt::{Receipt, ReceiptFailure, ReceiptOut};
