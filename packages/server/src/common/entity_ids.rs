//! Typed ID definitions for domain entities.
//!
//! Sample app rows are keyed by a plain integer primary key. Wrapping it keeps
//! record ids from being confused with indices or counts at call sites.
//!
//! # Example
//!
//! ```rust
//! use sampleapp_core::common::SampleAppId;
//!
//! let id = SampleAppId::new(7);
//! assert_eq!(id.as_i32(), 7);
//! assert_eq!(id.to_string(), "7");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Primary key of a row in `sampleapp_table`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct SampleAppId(i32);

impl SampleAppId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<i32> for SampleAppId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for SampleAppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SampleAppId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
