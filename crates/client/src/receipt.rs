use serde::Deserialize;

use crate::error::{FetchError, Result};

/// A capability invocation receipt. The outcome lives under `out`: either
/// an `ok` payload or an `error` record; service failures arrive inside
/// the receipt, not as transport errors.
#[derive(Debug, Clone, Deserialize)]
pub struct Receipt<T> {
    pub out: ReceiptOut<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptOut<T> {
    pub ok: Option<T>,
    pub error: Option<ReceiptFailure>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptFailure {
    pub name: Option<String>,
    pub message: Option<String>,
}

impl From<ReceiptFailure> for FetchError {
    fn from(failure: ReceiptFailure) -> Self {
        Self::Receipt {
            name: failure.name.unwrap_or_else(|| "UnknownError".to_string()),
            message: failure
                .message
                .unwrap_or_else(|| "capability invocation failed".to_string()),
        }
    }
}

impl<T> Receipt<T> {
    /// An `error` record wins over any `ok` payload; a receipt carrying
    /// neither is treated as an absent payload.
    pub fn into_result(self) -> Result<Option<T>> {
        if let Some(failure) = self.out.error {
            return Err(failure.into());
        }
        Ok(self.out.ok)
    }
}
