use std::fmt;

use serde::{Deserialize, Serialize};

/// One tebibyte in bytes. The billing unit for storage and egress.
pub const TIB: u64 = 1 << 40;

const GIB: u64 = 1 << 30;

/// Binary byte units used for auto-scaled display values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteUnit {
    B,
    KiB,
    MiB,
    GiB,
    TiB,
    PiB,
}

impl ByteUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KiB => "KiB",
            Self::MiB => "MiB",
            Self::GiB => "GiB",
            Self::TiB => "TiB",
            Self::PiB => "PiB",
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A byte count rescaled to the largest unit for which the value is >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaled {
    pub value: f64,
    pub unit: ByteUnit,
}

impl Scaled {
    pub fn formatted(&self) -> String {
        format!("{:.2} {}", self.value, self.unit)
    }
}

pub fn bytes_to_tib(bytes: u64) -> f64 {
    bytes as f64 / TIB as f64
}

pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / GIB as f64
}

/// Pick the largest unit keeping the displayed value >= 1. Zero bytes
/// reports as 0.00 GiB, matching the dashboard's empty-account display.
pub fn scale_bytes(bytes: u64) -> Scaled {
    const UNITS: [ByteUnit; 6] = [
        ByteUnit::B,
        ByteUnit::KiB,
        ByteUnit::MiB,
        ByteUnit::GiB,
        ByteUnit::TiB,
        ByteUnit::PiB,
    ];

    if bytes == 0 {
        return Scaled {
            value: 0.0,
            unit: ByteUnit::GiB,
        };
    }

    let mut index = 0;
    let mut divisor = 1u64;
    while index + 1 < UNITS.len() && bytes >= divisor.saturating_mul(1024) {
        divisor = divisor.saturating_mul(1024);
        index += 1;
    }

    Scaled {
        value: bytes as f64 / divisor as f64,
        unit: UNITS[index],
    }
}
