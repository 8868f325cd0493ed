//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for reading times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Whole seconds since the unix epoch, as carried on the wire.
#[must_use]
pub fn unix_seconds(ts: Timestamp) -> i64 {
    ts.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_truncate_to_whole_seconds() {
        let ts = DateTime::from_timestamp(1_700_000_000, 999_000_000).unwrap();
        assert_eq!(unix_seconds(ts), 1_700_000_000);
    }

    #[test]
    fn should_return_zero_at_epoch() {
        assert_eq!(unix_seconds(DateTime::UNIX_EPOCH), 0);
    }
}
