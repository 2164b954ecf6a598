//! Timestamp value object for immutable points in time.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Out-of-range values clamp to the Unix epoch.
    pub fn from_unix_secs(secs: i64) -> Self {
        Self(Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
    }

    /// RFC 3339 rendering with UTC `Z` suffix, as used in exports.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Timestamp(Utc::now());
        let ts = Timestamp::now();
        let after = Timestamp(Utc::now());

        assert!(before <= ts);
        assert!(ts <= after);
    }

    #[test]
    fn timestamp_ordering_follows_unix_seconds() {
        assert!(Timestamp::from_unix_secs(1_000) < Timestamp::from_unix_secs(1_001));
    }

    #[test]
    fn timestamp_renders_rfc3339_with_z() {
        // 2024-01-15T00:00:00Z
        let ts = Timestamp::from_unix_secs(1705276800);
        assert_eq!(ts.to_rfc3339(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn out_of_range_unix_secs_clamp_to_epoch() {
        assert_eq!(Timestamp::from_unix_secs(i64::MAX).to_rfc3339(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn timestamp_json_preserves_subsecond_precision() {
        let json = "\"2024-01-15T10:30:00.123456789Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();

        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00.123456789Z");
        assert_eq!(serde_json::to_string(&ts).unwrap(), json);
    }
}
