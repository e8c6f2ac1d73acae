use chrono::{DateTime, TimeDelta, Utc};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BucketWidthError {
    #[error("bucket width must be positive, got {0}")]
    NonPositive(i64),

    #[error("invalid bucket width '{0}': expected <number><s|m|h|d>, e.g. '15m' or '1h'")]
    Malformed(String),
}

/// Timeline bucket granularity. The reference dataset happens to be
/// hourly, but the width is an explicit parameter so aggregation stays
/// correct for logs of any sampling density.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BucketWidth(TimeDelta);

impl BucketWidth {
    pub fn new(width: TimeDelta) -> Result<Self, BucketWidthError> {
        if width.num_seconds() <= 0 {
            return Err(BucketWidthError::NonPositive(width.num_seconds()));
        }
        Ok(Self(width))
    }

    pub fn hours(h: i64) -> Result<Self, BucketWidthError> {
        Self::new(TimeDelta::hours(h))
    }

    /// Floor `ts` to the start of its bucket, in whole seconds since
    /// the Unix epoch. div_euclid keeps pre-epoch timestamps flooring
    /// toward earlier time rather than toward zero.
    pub fn truncate(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let width = self.0.num_seconds();
        let floored = ts.timestamp().div_euclid(width) * width;
        DateTime::from_timestamp(floored, 0).unwrap_or(ts)
    }
}

impl Default for BucketWidth {
    fn default() -> Self {
        Self(TimeDelta::hours(1))
    }
}

impl FromStr for BucketWidth {
    type Err = BucketWidthError;

    /// Accepts config-style widths: "30s", "15m", "1h", "7d".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s.len().checked_sub(1).filter(|i| s.is_char_boundary(*i));
        let Some(split) = split else {
            return Err(BucketWidthError::Malformed(s.to_string()));
        };

        let (digits, unit) = s.split_at(split);
        let n: i64 = digits
            .parse()
            .map_err(|_| BucketWidthError::Malformed(s.to_string()))?;

        let delta = match unit {
            "s" => TimeDelta::try_seconds(n),
            "m" => TimeDelta::try_minutes(n),
            "h" => TimeDelta::try_hours(n),
            "d" => TimeDelta::try_days(n),
            _ => return Err(BucketWidthError::Malformed(s.to_string())),
        };

        let delta = delta.ok_or_else(|| BucketWidthError::Malformed(s.to_string()))?;
        Self::new(delta)
    }
}
