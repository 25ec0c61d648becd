use std::fmt;
use std::str::FromStr;

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How long a snippet stays visible after it is created.
///
/// Only these three lifetimes are offered by the create form; anything else
/// submitted by a client is rejected before it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Expiry {
    Day,
    Week,
    #[default]
    Year,
}

impl Expiry {
    pub const ALL: [Expiry; 3] = [Expiry::Day, Expiry::Week, Expiry::Year];

    pub fn days(self) -> u32 {
        match self {
            Expiry::Day => 1,
            Expiry::Week => 7,
            Expiry::Year => 365,
        }
    }

    pub fn duration(self) -> SignedDuration {
        SignedDuration::from_hours(24 * i64::from(self.days()))
    }

    /// The expiry timestamp for a snippet created at `created`.
    pub fn expires_at(self, created: Timestamp) -> Result<Timestamp, CoreError> {
        Ok(created.checked_add(self.duration())?)
    }
}

impl TryFrom<u32> for Expiry {
    type Error = CoreError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            1 => Ok(Expiry::Day),
            7 => Ok(Expiry::Week),
            365 => Ok(Expiry::Year),
            other => Err(CoreError::InvalidExpiry(other.to_string())),
        }
    }
}

impl From<Expiry> for u32 {
    fn from(expiry: Expiry) -> Self {
        expiry.days()
    }
}

impl FromStr for Expiry {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: u32 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidExpiry(s.to_string()))?;
        Expiry::try_from(days).map_err(|_| CoreError::InvalidExpiry(s.to_string()))
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}
